//! Size-bounded artifact cache management for Vermeer.
//!
//! The cache manager owns a persistent artifact store and keeps its total
//! size under an approximate budget by evicting the oldest entries first.
//! Statistics are fail-soft: a broken storage layer degrades to zeroed
//! stats rather than an error, since stats are read on every view mount.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use vermeer_cache::{CacheConfig, CacheManager};
//! use vermeer_core::{Artifact, ArtifactKind, ArtifactPayload};
//! use vermeer_storage::FileSystemStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(FileSystemStore::new("/tmp/vermeer-cache")?);
//! let cache = CacheManager::new(CacheConfig::default(), store);
//!
//! let payload = ArtifactPayload::new(vec![0u8; 1024], "video/mp4");
//! cache.put(&Artifact::new(ArtifactKind::Video, "city drone shot", payload)).await?;
//!
//! let stats = cache.stats().await;
//! assert_eq!(*stats.count(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod manager;
mod stats;

pub use config::{CacheConfig, CacheConfigBuilder, DEFAULT_MAX_CACHE_BYTES};
pub use manager::CacheManager;
pub use stats::{CacheStats, FormattedStats};
