//! Process configuration
//!
//! Everything is read from environment variables; `main` loads a `.env` file
//! first when one exists.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

use crate::llm::ProviderConfig;
use crate::store::{DatabaseConfig, StoreError};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error(transparent)]
    Database(#[from] StoreError),
}

/// Settings for the whole service
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub database: DatabaseConfig,
    pub openai: ProviderConfig,
    pub groq: ProviderConfig,
}

impl AppConfig {
    /// Read `HOST`, `PORT`, the database variables and the provider variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = match env_var("HOST") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name: "HOST", value })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match env_var("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            port,
            database: DatabaseConfig::from_env()?,
            openai: ProviderConfig::openai_from_env(),
            groq: ProviderConfig::groq_from_env(),
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
