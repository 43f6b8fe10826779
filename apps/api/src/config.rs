//! API server configuration

use std::env;

use anyhow::{Context, Result};
use graphql_demo_shared_config::{parse_env, BatchConfig, CommonConfig, Environment, ServerConfig};

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with other services
    pub common: CommonConfig,

    /// CORS allowed origins (optional)
    pub cors_allowed_origins: Option<Vec<String>>,

    /// Serve the GraphiQL and Playground IDEs (default: outside production)
    pub graphiql_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let common = CommonConfig::from_env().context("Failed to load common config")?;
        let graphiql_enabled = parse_env("GRAPHIQL_ENABLED", !common.environment.is_production())
            .context("Invalid GRAPHIQL_ENABLED value")?;

        Ok(Self {
            common,

            cors_allowed_origins: env::var("CORS_ORIGINS").ok().map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),

            graphiql_enabled,
        })
    }

    // Convenience accessors for common config fields

    /// Get server listener configuration
    pub fn server(&self) -> &ServerConfig {
        &self.common.server
    }

    /// Get associated record batching configuration
    pub fn batch(&self) -> &BatchConfig {
        &self.common.batch
    }

    /// Get environment mode
    pub fn environment(&self) -> Environment {
        self.common.environment
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.common.environment.is_production()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            common: CommonConfig::default(),
            cors_allowed_origins: None,
            graphiql_enabled: true,
        }
    }
}
