//! Persisted artifact record types.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vermeer_core::{Artifact, ArtifactKind};

/// Persisted metadata for a stored artifact.
///
/// Records are what storage backends enumerate for statistics and eviction,
/// so they carry everything needed to rank and account for an entry without
/// reading its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ArtifactRecord {
    /// Unique identifier of the artifact
    id: Uuid,
    /// Kind of media
    kind: ArtifactKind,
    /// Short descriptive string for display
    prompt_summary: String,
    /// MIME type of the payload
    mime_type: String,
    /// Payload length at store time
    size_bytes: u64,
    /// SHA-256 hex digest of the payload, verified on read
    content_hash: String,
    /// Creation timestamp, used for eviction ordering
    created_at: DateTime<Utc>,
}

impl ArtifactRecord {
    /// Build a record for an artifact and its payload digest.
    pub fn from_artifact(artifact: &Artifact, content_hash: impl Into<String>) -> Self {
        Self {
            id: *artifact.id(),
            kind: *artifact.kind(),
            prompt_summary: artifact.prompt_summary().clone(),
            mime_type: artifact.payload().mime_type().clone(),
            size_bytes: artifact.size_bytes(),
            content_hash: content_hash.into(),
            created_at: *artifact.created_at(),
        }
    }
}
