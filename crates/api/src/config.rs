//! API configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::{env, net::SocketAddr};

use storefront_observability::LogFormat;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address the HTTP listener binds (`STOREFRONT_BIND_ADDR`).
    pub bind_addr: SocketAddr,

    /// Log output format (`STOREFRONT_LOG_FORMAT`: `json` or `pretty`).
    pub log_format: LogFormat,
}

impl ApiConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("STOREFRONT_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("STOREFRONT_BIND_ADDR".to_string()))?;

        let log_format = match lookup("STOREFRONT_LOG_FORMAT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STOREFRONT_LOG_FORMAT".to_string()))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            log_format,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn reads_overrides() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("STOREFRONT_BIND_ADDR", "127.0.0.1:3000"),
            ("STOREFRONT_LOG_FORMAT", "pretty"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_invalid_values() {
        let err = ApiConfig::from_lookup(lookup(&[("STOREFRONT_BIND_ADDR", "nowhere")])).unwrap_err();
        assert!(err.to_string().contains("STOREFRONT_BIND_ADDR"));

        let err = ApiConfig::from_lookup(lookup(&[("STOREFRONT_LOG_FORMAT", "xml")])).unwrap_err();
        assert!(err.to_string().contains("STOREFRONT_LOG_FORMAT"));
    }
}
