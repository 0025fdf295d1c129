//! Storage trait definition.

use crate::ArtifactRecord;
use uuid::Uuid;
use vermeer_core::Artifact;
use vermeer_error::VermeerResult;

/// Trait for pluggable artifact storage backends.
///
/// Implementations handle persistence of artifact payloads and their
/// metadata records. Entries are keyed by artifact id; `put` with an
/// existing id overwrites the previous entry (last write wins).
#[async_trait::async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Store an artifact, overwriting any entry with the same id.
    ///
    /// # Arguments
    ///
    /// * `artifact` - The artifact to persist
    ///
    /// # Returns
    ///
    /// The `ArtifactRecord` written alongside the payload
    async fn put(&self, artifact: &Artifact) -> VermeerResult<ArtifactRecord>;

    /// Load an artifact by id.
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` storage error when no entry has this id, and an
    /// integrity error when the payload no longer matches its stored digest.
    async fn get(&self, id: Uuid) -> VermeerResult<Artifact>;

    /// Delete an entry by id.
    ///
    /// # Returns
    ///
    /// `true` when an entry was removed, `false` when no entry had this id.
    /// A missing entry is not an error.
    async fn delete(&self, id: Uuid) -> VermeerResult<bool>;

    /// Enumerate the records of all live entries.
    ///
    /// Undecodable records are skipped with a warning rather than failing
    /// the whole scan.
    async fn list(&self) -> VermeerResult<Vec<ArtifactRecord>>;

    /// Delete every entry.
    ///
    /// # Returns
    ///
    /// The number of entries removed. Idempotent; an empty store returns 0.
    async fn clear(&self) -> VermeerResult<usize>;

    /// Check whether an entry with this id exists.
    async fn exists(&self, id: Uuid) -> VermeerResult<bool>;
}
