//! Engine session configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use vermeer_error::ConfigError;

/// Configuration for engine readiness polling.
///
/// The defaults give the engine roughly fifteen seconds to appear:
/// sixty probes, 250 ms apart.
///
/// # Examples
///
/// ```
/// use vermeer_combine::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(*config.max_attempts(), 60);
/// assert_eq!(config.poll_interval().as_millis(), 250);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct EngineConfig {
    /// Milliseconds between readiness probes
    #[serde(default = "default_poll_interval_ms")]
    #[builder(default = "default_poll_interval_ms()")]
    poll_interval_ms: u64,

    /// Number of readiness probes before giving up
    #[serde(default = "default_max_attempts")]
    #[builder(default = "default_max_attempts()")]
    max_attempts: u32,
}

fn default_poll_interval_ms() -> u64 {
    250
}

fn default_max_attempts() -> u32 {
    60
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl EngineConfig {
    /// Creates a new engine config builder.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Interval between readiness probes.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval or attempt budget is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::new("Poll interval must be nonzero"));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::new("Poll attempt budget must be nonzero"));
        }
        Ok(())
    }
}
