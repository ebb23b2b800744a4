use std::net::SocketAddr;
use std::path::PathBuf;

use crate::config::env::{optional, ConfigError};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Built frontend bundle served for every non-API path.
    pub static_dir: Option<PathBuf>,
    /// Allowed CORS origin. Any origin is allowed when unset.
    pub frontend_url: Option<String>,
    pub sentry_dsn: Option<String>,
}

impl ServerConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr =
            optional(&lookup, "BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr.parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: raw_addr.clone(),
            reason: "expected host:port",
        })?;

        Ok(Self {
            bind_addr,
            static_dir: optional(&lookup, "STATIC_DIR").map(PathBuf::from),
            frontend_url: optional(&lookup, "FRONTEND_URL"),
            sentry_dsn: optional(&lookup, "SENTRY_DSN"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(config.static_dir, None);
        assert_eq!(config.frontend_url, None);
        assert_eq!(config.sentry_dsn, None);
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(|name| match name {
            "BIND_ADDR" => Some("0.0.0.0:8080".to_string()),
            "STATIC_DIR" => Some("frontend/dist".to_string()),
            "FRONTEND_URL" => Some("https://thehelpingclub.com".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.static_dir, Some(PathBuf::from("frontend/dist")));
        assert_eq!(config.frontend_url.as_deref(), Some("https://thehelpingclub.com"));
    }

    #[test]
    fn rejects_unparseable_bind_addr() {
        let err = ServerConfig::from_lookup(|name| {
            (name == "BIND_ADDR").then(|| "localhost".to_string())
        })
        .unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { name: "BIND_ADDR", .. }));
    }
}
