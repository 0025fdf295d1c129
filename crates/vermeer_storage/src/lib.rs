//! Identity-keyed local artifact storage for Vermeer.
//!
//! This crate provides pluggable storage backends for generated media
//! artifacts (images, video, audio). Entries are keyed by artifact id;
//! a content hash is kept alongside each entry purely as an integrity
//! check on read.
//!
//! # Features
//!
//! - **Identity-keyed storage**: entries are addressed by artifact id, so a
//!   re-generated artifact with the same id overwrites its predecessor
//! - **Pluggable backends**: trait-based abstraction over the persistence
//!   layer
//! - **Atomic writes**: temp file + rename, so readers never see a torn
//!   payload
//!
//! # Example
//!
//! ```rust
//! use vermeer_core::{Artifact, ArtifactKind, ArtifactPayload};
//! use vermeer_storage::{ArtifactStore, FileSystemStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = FileSystemStore::new("/tmp/vermeer-artifacts")?;
//!
//! let payload = ArtifactPayload::new(vec![0u8; 1024], "video/mp4");
//! let artifact = Artifact::new(ArtifactKind::Video, "sunset timelapse", payload);
//!
//! let record = store.put(&artifact).await?;
//! assert_eq!(*record.size_bytes(), 1024);
//!
//! let loaded = store.get(*artifact.id()).await?;
//! assert_eq!(loaded, artifact);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod record;
mod store;

pub use filesystem::FileSystemStore;
pub use record::ArtifactRecord;
pub use store::ArtifactStore;
pub use vermeer_error::{StorageError, StorageErrorKind};
