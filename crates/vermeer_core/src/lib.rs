//! Core data types for the Vermeer media suite.
//!
//! This crate provides the foundation data types used across all Vermeer
//! crates: generated media artifacts, their payloads, and shared presentation
//! helpers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
mod format;
mod kind;
mod payload;
mod telemetry;

pub use artifact::Artifact;
pub use format::format_bytes;
pub use kind::ArtifactKind;
pub use payload::ArtifactPayload;
pub use telemetry::init_telemetry;
