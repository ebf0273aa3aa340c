use std::{env, fmt::Display, net::SocketAddr, str::FromStr, time::Duration};

use thiserror::Error;
use tracing::info;

use crate::pagination::DEFAULT_MAX_LIMIT;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub port: u16,
    pub request_timeout: Duration,
    pub max_page_size: i64,
}

impl Config {
    /// Read settings from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let timeout_secs: u64 = try_load(&lookup, "REQUEST_TIMEOUT_SECS", "15")?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "REQUEST_TIMEOUT_SECS",
                value: timeout_secs.to_string(),
                reason: "timeout must be at least one second".to_string(),
            });
        }

        Ok(Self {
            database_url: try_load(&lookup, "DATABASE_URL", "gazette.db")?,
            bind_address: try_load(&lookup, "BIND_ADDRESS", "0.0.0.0")?,
            port: try_load(&lookup, "PORT", "5000")?,
            request_timeout: Duration::from_secs(timeout_secs),
            max_page_size: try_load(&lookup, "MAX_PAGE_SIZE", &DEFAULT_MAX_LIMIT.to_string())?,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.bind_address, self.port);
        addr.parse().map_err(|err: std::net::AddrParseError| ConfigError::Invalid {
            key: "BIND_ADDRESS",
            value: addr.clone(),
            reason: err.to_string(),
        })
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|err: T::Err| ConfigError::Invalid {
        key,
        value: value.clone(),
        reason: err.to_string(),
    })
}
