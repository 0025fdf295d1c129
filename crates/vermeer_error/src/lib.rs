//! Error types for the Vermeer media suite.
//!
//! This crate provides the foundation error types used throughout the Vermeer
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vermeer_error::{VermeerResult, ConfigError};
//!
//! fn load_settings() -> VermeerResult<String> {
//!     Err(ConfigError::new("Missing cache budget"))?
//! }
//!
//! match load_settings() {
//!     Ok(settings) => println!("Got: {}", settings),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod combine;
mod config;
mod error;
mod storage;

pub use combine::{CombineError, CombineErrorKind};
pub use config::ConfigError;
pub use error::{VermeerError, VermeerErrorKind, VermeerResult};
pub use storage::{StorageError, StorageErrorKind};
