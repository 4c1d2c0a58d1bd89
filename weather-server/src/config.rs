//! Server configuration from environment variables.

use std::net::SocketAddr;

use crate::cwa::CwaConfig;
use crate::format::Language;

/// Address the HTTP endpoint binds to when `CWA_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Errors reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Required variable not set or empty
    #[error("{0} is not set")]
    Missing(&'static str),

    /// Variable set to something unusable
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Everything `main` needs to start serving.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// CWA open-data API key (`CWA_API_KEY`)
    pub api_key: String,
    /// Listen address (`CWA_BIND_ADDR`)
    pub bind_addr: SocketAddr,
    /// Response label language (`CWA_LANGUAGE`: `en` or `zh`)
    pub language: Language,
    /// Upstream client settings (`CWA_TIMEOUT_SECS`)
    pub cwa: CwaConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let api_key = get("CWA_API_KEY").ok_or(ConfigError::Missing("CWA_API_KEY"))?;

        let bind_addr = get("CWA_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|_| ConfigError::Invalid {
                var: "CWA_BIND_ADDR",
                value: bind_addr.clone(),
            })?;

        let language = match get("CWA_LANGUAGE").as_deref() {
            None | Some("en") => Language::English,
            Some("zh") | Some("zh-TW") => Language::Chinese,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "CWA_LANGUAGE",
                    value: other.to_string(),
                });
            }
        };

        let mut cwa = CwaConfig::new();
        if let Some(secs) = get("CWA_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| ConfigError::Invalid {
                var: "CWA_TIMEOUT_SECS",
                value: secs.clone(),
            })?;
            cwa = cwa.with_timeout(secs);
        }

        Ok(Self {
            api_key,
            bind_addr,
            language,
            cwa,
        })
    }
}
