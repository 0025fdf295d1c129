//! On-device video combine pipeline for Vermeer.
//!
//! This crate drives an external video-transcoding engine through a strict
//! session lifecycle: poll for the capability, load its core once, stage
//! source clips into the engine's virtual filesystem, run a fixed
//! concatenation transform, read the result back, and remove every staged
//! file whether the transform succeeded or failed.
//!
//! The engine itself is consumed through the narrow [`CombineEngine`]
//! capability trait, so the rest of the system never depends on the external
//! object's full shape and tests can substitute a fake.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vermeer_combine::{CombineEngine, EngineConfig, EngineSession};
//! # async fn example(engine: Arc<dyn CombineEngine>) -> Result<(), Box<dyn std::error::Error>> {
//! # let sources = vec![];
//! let mut session = EngineSession::new(engine, EngineConfig::default());
//! session.initialize().await?;
//! let merged = session.combine(&sources).await?;
//! println!("merged {} bytes", merged.size_bytes());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod engine;
mod progress;
mod session;
mod status;

pub use config::{EngineConfig, EngineConfigBuilder};
pub use engine::{CombineEngine, LogSink};
pub use progress::{parse_time_marker, CombineProgress, ProgressSink};
pub use session::EngineSession;
pub use status::EngineStatus;
pub use vermeer_error::{CombineError, CombineErrorKind};
