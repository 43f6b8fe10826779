//! HTTP listener configuration types

use std::net::{IpAddr, SocketAddr};

use crate::{get_env_or_default, parse_env, ConfigError, ConfigResult};

/// Address the API server binds to
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind (default: 0.0.0.0)
    pub host: IpAddr,

    /// Listening port (default: 8080)
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        let host = get_env_or_default("SERVER_HOST", "0.0.0.0");
        let host = host
            .parse()
            .map_err(|e| ConfigError::InvalidValue("SERVER_HOST".to_string(), format!("{}", e)))?;

        Ok(Self {
            host,
            port: parse_env("PORT", 8080)?,
        })
    }

    /// Socket address built from host and port
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_from_env_overrides() {
        temp_env::with_vars([("SERVER_HOST", Some("127.0.0.1")), ("PORT", Some("9000"))], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
        });
    }

    #[test]
    fn test_invalid_host_rejected() {
        temp_env::with_var("SERVER_HOST", Some("not a host"), || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("SERVER_HOST"));
        });
    }

    #[test]
    fn test_invalid_port_rejected() {
        temp_env::with_vars([("SERVER_HOST", None), ("PORT", Some("99999"))], || {
            assert!(ServerConfig::from_env().is_err());
        });
    }
}
