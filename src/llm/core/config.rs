//! Provider connection settings

use std::env;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4o-mini";

pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const GROQ_DEFAULT_MODEL: &str = "llama3-70b-8192";

/// Where and how to reach one chat-completion provider
#[derive(Clone)]
pub struct ProviderConfig {
    /// Bearer token sent with every request
    pub api_key: String,
    /// Base URL up to and including the API version, without trailing slash
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
}

impl ProviderConfig {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    /// OpenAI settings from `OPENAI_API_KEY`, `OPENAI_BASE_URL` and `OPENAI_MODEL`
    pub fn openai_from_env() -> Self {
        Self::from_env("OPENAI", OPENAI_BASE_URL, OPENAI_DEFAULT_MODEL)
    }

    /// Groq settings from `GROQ_API_KEY`, `GROQ_BASE_URL` and `GROQ_MODEL`
    pub fn groq_from_env() -> Self {
        Self::from_env("GROQ", GROQ_BASE_URL, GROQ_DEFAULT_MODEL)
    }

    /// Set the model (builder pattern)
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Empty variables count as unset, so `OPENAI_API_KEY=` still warns
    fn from_env(prefix: &str, default_base_url: &str, default_model: &str) -> Self {
        let var = |name: &str| {
            env::var(format!("{}_{}", prefix, name))
                .ok()
                .filter(|value| !value.is_empty())
        };

        // A missing key only surfaces once the provider rejects a call
        if var("API_KEY").is_none() {
            tracing::warn!("{}_API_KEY is not set", prefix);
        }

        Self::new(
            var("API_KEY").unwrap_or_default(),
            var("BASE_URL").unwrap_or_else(|| default_base_url.to_string()),
            var("MODEL").unwrap_or_else(|| default_model.to_string()),
        )
    }
}

// Keep the key out of logs
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::EnvGuard;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = ProviderConfig::new("key", "http://localhost:8080/v1/", "m");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn test_with_model() {
        let config =
            ProviderConfig::new("key", OPENAI_BASE_URL, OPENAI_DEFAULT_MODEL).with_model("gpt-4o");
        assert_eq!(config.model, "gpt-4o");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ProviderConfig::new("sk-secret", GROQ_BASE_URL, GROQ_DEFAULT_MODEL);
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("llama3-70b-8192"));
    }

    #[test]
    fn test_openai_from_env_defaults() {
        let _env = EnvGuard::set(&[("OPENAI_API_KEY", "sk-openai")]);

        let config = ProviderConfig::openai_from_env();
        assert_eq!(config.api_key, "sk-openai");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-4o-mini");
    }

    #[test]
    fn test_groq_from_env_defaults() {
        let _env = EnvGuard::set(&[("GROQ_API_KEY", "gsk-groq")]);

        let config = ProviderConfig::groq_from_env();
        assert_eq!(config.api_key, "gsk-groq");
        assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.model, "llama3-70b-8192");
    }

    #[test]
    fn test_from_env_overrides() {
        let _env = EnvGuard::set(&[
            ("OPENAI_MODEL", "gpt-4o"),
            ("OPENAI_BASE_URL", "http://localhost:8080/v1/"),
            ("GROQ_MODEL", "llama-3.3-70b-versatile"),
        ]);

        let openai = ProviderConfig::openai_from_env();
        assert_eq!(openai.model, "gpt-4o");
        assert_eq!(openai.base_url, "http://localhost:8080/v1");

        let groq = ProviderConfig::groq_from_env();
        assert_eq!(groq.model, "llama-3.3-70b-versatile");
        assert_eq!(groq.base_url, GROQ_BASE_URL);
    }

    #[test]
    fn test_from_env_empty_values_count_as_unset() {
        let _env = EnvGuard::set(&[
            ("OPENAI_API_KEY", ""),
            ("OPENAI_MODEL", ""),
            ("OPENAI_BASE_URL", ""),
            ("GROQ_API_KEY", ""),
            ("GROQ_MODEL", ""),
        ]);

        let openai = ProviderConfig::openai_from_env();
        assert_eq!(openai.api_key, "");
        assert_eq!(openai.model, OPENAI_DEFAULT_MODEL);
        assert_eq!(openai.base_url, OPENAI_BASE_URL);

        let groq = ProviderConfig::groq_from_env();
        assert_eq!(groq.model, GROQ_DEFAULT_MODEL);
    }
}
