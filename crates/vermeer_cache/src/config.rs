//! Cache configuration.

use serde::{Deserialize, Serialize};
use vermeer_error::ConfigError;

/// Default cache ceiling: 500 MiB.
pub const DEFAULT_MAX_CACHE_BYTES: u64 = 500 * 1024 * 1024;

/// Configuration for the artifact cache.
///
/// # Examples
///
/// ```
/// use vermeer_cache::{CacheConfig, DEFAULT_MAX_CACHE_BYTES};
///
/// let config = CacheConfig::default();
/// assert_eq!(*config.max_total_bytes(), DEFAULT_MAX_CACHE_BYTES);
///
/// let small = CacheConfig::builder()
///     .max_total_bytes(64 * 1024 * 1024)
///     .build()
///     .unwrap();
/// assert!(small.validate().is_ok());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct CacheConfig {
    /// Approximate ceiling on total stored bytes before eviction triggers
    #[serde(default = "default_max_total_bytes")]
    #[builder(default = "default_max_total_bytes()")]
    max_total_bytes: u64,
}

fn default_max_total_bytes() -> u64 {
    DEFAULT_MAX_CACHE_BYTES
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_total_bytes: default_max_total_bytes(),
        }
    }
}

impl CacheConfig {
    /// Creates a new cache config builder.
    pub fn builder() -> CacheConfigBuilder {
        CacheConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the byte ceiling is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_total_bytes == 0 {
            return Err(ConfigError::new("Cache byte ceiling must be nonzero"));
        }
        Ok(())
    }
}
