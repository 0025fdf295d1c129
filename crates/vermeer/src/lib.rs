//! Vermeer - Local Media Artifact Cache & Combine Pipeline
//!
//! Vermeer is the engine-side core of an AI media suite: a durable local
//! store of generated media artifacts with size-bounded eviction, and a
//! combine pipeline that drives an external video-transcoding engine
//! through a strict session lifecycle.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vermeer::{CacheConfig, CacheManager, EngineConfig, EngineSession, FileSystemStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(FileSystemStore::new("~/.vermeer/artifacts")?);
//!     let cache = CacheManager::new(CacheConfig::default(), store);
//!
//!     let stats = cache.formatted_stats().await;
//!     println!("{} across {} artifacts", stats.size_label(), stats.count());
//!
//!     let mut session = EngineSession::new(engine, EngineConfig::default());
//!     session.initialize().await?;
//!     let merged = session.combine(&clips).await?;
//!     cache.put(&merged).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Vermeer is organized as a workspace with focused crates:
//!
//! - `vermeer_core` - Artifact data types and shared helpers
//! - `vermeer_error` - Error types
//! - `vermeer_storage` - Identity-keyed persistent artifact storage
//! - `vermeer_cache` - Size-bounded cache management
//! - `vermeer_combine` - Engine session and combine pipeline
//!
//! This crate (`vermeer`) re-exports everything for convenience.

// Re-export core crates (always available)
pub use vermeer_cache::*;
pub use vermeer_combine::*;
pub use vermeer_core::*;
pub use vermeer_error::*;
pub use vermeer_storage::*;
