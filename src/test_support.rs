// Helpers for unit tests that touch the process environment

use std::env;
use std::sync::{Mutex, MutexGuard};

/// Every variable the configuration code reads
const CONFIG_VARS: &[&str] = &[
    "HOST",
    "PORT",
    "DATABASE_URL",
    "DATABASE_HOST",
    "DATABASE_PORT",
    "DATABASE_USERNAME",
    "DATABASE_PASSWORD",
    "DATABASE_NAME",
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "OPENAI_MODEL",
    "GROQ_API_KEY",
    "GROQ_BASE_URL",
    "GROQ_MODEL",
];

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Holds the environment lock with only the given config variables set
///
/// All other config variables are cleared. The previous values come back on
/// drop.
pub(crate) struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub(crate) fn set(vars: &[(&str, &str)]) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let saved = CONFIG_VARS
            .iter()
            .map(|name| (*name, env::var(name).ok()))
            .collect();

        for name in CONFIG_VARS {
            env::remove_var(name);
        }
        for (name, value) in vars {
            env::set_var(name, value);
        }

        Self { saved, _lock: lock }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in &self.saved {
            match value {
                Some(value) => env::set_var(name, value),
                None => env::remove_var(name),
            }
        }
    }
}
