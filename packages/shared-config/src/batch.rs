//! Batch loading configuration types

use std::time::Duration;

use crate::{parse_env, ConfigError, ConfigResult};

/// Controls how sibling field resolutions are grouped into one batch
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// How long a loader waits for more keys before dispatching, in milliseconds
    pub delay_ms: u64,

    /// Upper bound on keys dispatched in one batch
    pub max_batch_size: usize,
}

impl BatchConfig {
    /// Load batch configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        let config = Self {
            delay_ms: parse_env("BATCH_DELAY_MS", 1)?,
            max_batch_size: parse_env("BATCH_MAX_SIZE", 1000)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would stall every loader
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_batch_size == 0 {
            return Err(ConfigError::ValidationError(
                "BATCH_MAX_SIZE must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Loader delay as a duration
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1,
            max_batch_size: 1000,
        }
    }
}
