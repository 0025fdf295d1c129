//! Generated media artifact types.

use crate::{ArtifactKind, ArtifactPayload};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use uuid::Uuid;

/// A single generated media result with identity, payload, and metadata.
///
/// Identity and metadata are assigned at creation time and never change.
/// The size of an artifact is always derived from its payload rather than
/// cached, so it can never go stale.
///
/// # Examples
///
/// ```
/// use vermeer_core::{Artifact, ArtifactKind, ArtifactPayload};
///
/// let payload = ArtifactPayload::new(vec![1, 2, 3], "video/mp4");
/// let artifact = Artifact::new(ArtifactKind::Video, "A cat on a skateboard", payload);
/// assert_eq!(artifact.size_bytes(), 3);
/// assert_eq!(*artifact.kind(), ArtifactKind::Video);
/// ```
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Artifact {
    /// Unique identifier, assigned at creation
    id: Uuid,
    /// Kind of media this artifact holds
    kind: ArtifactKind,
    /// Short descriptive string for display
    prompt_summary: String,
    /// Owned binary payload
    payload: ArtifactPayload,
    /// Creation timestamp, used for eviction ordering and display
    created_at: DateTime<Utc>,
}

impl Artifact {
    /// Create a new artifact with a fresh id and the current timestamp.
    pub fn new(kind: ArtifactKind, prompt_summary: impl Into<String>, payload: ArtifactPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            prompt_summary: prompt_summary.into(),
            payload,
            created_at: Utc::now(),
        }
    }

    /// Reconstruct an artifact from previously stored parts.
    ///
    /// Used by storage backends when loading an entry back from disk.
    pub fn from_parts(
        id: Uuid,
        kind: ArtifactKind,
        prompt_summary: impl Into<String>,
        payload: ArtifactPayload,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            kind,
            prompt_summary: prompt_summary.into(),
            payload,
            created_at,
        }
    }

    /// Byte length of the payload, computed at read time.
    pub fn size_bytes(&self) -> u64 {
        self.payload.len() as u64
    }
}
