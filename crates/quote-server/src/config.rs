//! Environment-driven configuration

use crate::storage::StoreKind;
use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;
use std::net::SocketAddr;

/// Prefix for every environment variable the service reads.
pub const ENV_PREFIX: &str = "QUOTE_SERVICE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Unset selects the in-memory store; empty provisions a local database.
    #[serde(default)]
    pub connection_string: Option<String>,

    #[serde(default = "default_db_host")]
    pub db_host: String,

    #[serde(default = "default_db_port")]
    pub db_port: u16,

    #[serde(default)]
    pub log_json: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    7777
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            connection_string: None,
            db_host: default_db_host(),
            db_port: default_db_port(),
            log_json: false,
        }
    }
}

impl Settings {
    /// Load settings from `QUOTE_SERVICE_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_environment(env: Environment) -> Result<Self> {
        Config::builder()
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn store_kind(&self) -> StoreKind {
        match self.connection_string.as_deref().map(str::trim) {
            None => StoreKind::Memory,
            Some("") => StoreKind::LocalPostgres,
            Some(url) => StoreKind::Postgres(url.to_string()),
        }
    }

    pub fn bind_address(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Failed to parse bind address {}:{}", self.host, self.port))
    }
}
