//! Filesystem-based artifact storage implementation.
//!
//! This backend stores each artifact as a payload file plus a JSON record
//! sidecar, organized into one subdirectory per media kind.

use crate::{ArtifactRecord, ArtifactStore};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use uuid::Uuid;
use vermeer_core::{Artifact, ArtifactKind, ArtifactPayload};
use vermeer_error::{StorageError, StorageErrorKind, VermeerResult};

/// Filesystem storage backend.
///
/// Stores artifacts in an identity-keyed structure:
/// `{base_path}/{kind}/{id}` for the payload and
/// `{base_path}/{kind}/{id}.json` for the record.
///
/// # Example Structure
///
/// ```text
/// ~/.vermeer/artifacts/
/// ├── images/
/// │   ├── 5e0c...d1.json
/// │   └── 5e0c...d1          (PNG file)
/// ├── audio/
/// │   ├── 9af2...77.json
/// │   └── 9af2...77          (MP3 file)
/// └── video/
///     ├── 1b3d...c0.json
///     └── 1b3d...c0          (MP4 file)
/// ```
///
/// # Features
///
/// - **Identity-keyed**: files stored by artifact id, overwritten in place
/// - **Integrity-checked**: SHA-256 digest written at store time, verified
///   on every read
/// - **Atomic writes**: temp file + rename for both payload and record
pub struct FileSystemStore {
    base_path: PathBuf,
}

impl FileSystemStore {
    /// Create a new filesystem storage backend.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Arguments
    ///
    /// * `base_path` - Root directory for artifact storage
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> VermeerResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Created filesystem store");
        Ok(Self { base_path })
    }

    /// Compute SHA-256 hash of data.
    fn compute_hash(data: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data);
        format!("{:x}", hasher.finalize())
    }

    /// Subdirectory name for a media kind.
    fn kind_dir(kind: ArtifactKind) -> &'static str {
        match kind {
            ArtifactKind::Image => "images",
            ArtifactKind::Audio => "audio",
            ArtifactKind::Video => "video",
        }
    }

    /// Payload path for a given kind and id.
    fn payload_path(&self, kind: ArtifactKind, id: Uuid) -> PathBuf {
        self.base_path.join(Self::kind_dir(kind)).join(id.to_string())
    }

    /// Record sidecar path for a payload path.
    fn record_path(payload_path: &Path) -> PathBuf {
        payload_path.with_extension("json")
    }

    /// Find the payload path for an id, searching every kind directory.
    async fn locate(&self, id: Uuid) -> Option<PathBuf> {
        for kind in [ArtifactKind::Image, ArtifactKind::Video, ArtifactKind::Audio] {
            let payload = self.payload_path(kind, id);
            let record = Self::record_path(&payload);
            if tokio::fs::try_exists(&record).await.unwrap_or(false) {
                return Some(payload);
            }
        }
        None
    }

    /// Verify content hash matches expected hash.
    fn verify_hash(data: &[u8], expected_hash: &str) -> VermeerResult<()> {
        let actual_hash = Self::compute_hash(data);
        if actual_hash != expected_hash {
            return Err(StorageError::new(StorageErrorKind::InvalidPath(format!(
                "Hash mismatch: expected {}, got {}",
                expected_hash, actual_hash
            )))
            .into());
        }
        Ok(())
    }

    /// Write bytes to a path via temp file + rename.
    async fn write_atomic(path: &Path, data: &[u8]) -> VermeerResult<()> {
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        Ok(())
    }

    /// Read and decode one record sidecar.
    async fn read_record(path: &Path) -> VermeerResult<ArtifactRecord> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(path.display().to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        let record = serde_json::from_slice(&bytes).map_err(|e| {
            StorageError::new(StorageErrorKind::MetadataDecode(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        Ok(record)
    }
}

#[async_trait::async_trait]
impl ArtifactStore for FileSystemStore {
    #[tracing::instrument(skip(self, artifact), fields(id = %artifact.id(), kind = %artifact.kind(), size = artifact.size_bytes()))]
    async fn put(&self, artifact: &Artifact) -> VermeerResult<ArtifactRecord> {
        let hash = Self::compute_hash(artifact.payload().bytes());
        let record = ArtifactRecord::from_artifact(artifact, &hash);

        let payload_path = self.payload_path(*artifact.kind(), *artifact.id());
        if let Some(parent) = payload_path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        Self::write_atomic(&payload_path, artifact.payload().bytes()).await?;

        let record_json = serde_json::to_vec(&record).map_err(|e| {
            StorageError::new(StorageErrorKind::MetadataDecode(format!(
                "{}: {}",
                artifact.id(),
                e
            )))
        })?;
        Self::write_atomic(&Self::record_path(&payload_path), &record_json).await?;

        tracing::info!(
            hash = %hash,
            path = %payload_path.display(),
            "Stored artifact"
        );

        Ok(record)
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, id: Uuid) -> VermeerResult<Artifact> {
        let payload_path = self
            .locate(id)
            .await
            .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(id.to_string())))?;

        let record = Self::read_record(&Self::record_path(&payload_path)).await?;

        let data = tokio::fs::read(&payload_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(id.to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    payload_path.display(),
                    e
                )))
            }
        })?;

        // Verify content hash
        Self::verify_hash(&data, record.content_hash())?;

        tracing::debug!(
            path = %payload_path.display(),
            size = data.len(),
            "Retrieved artifact"
        );

        let payload = ArtifactPayload::new(data, record.mime_type().clone());
        Ok(Artifact::from_parts(
            *record.id(),
            *record.kind(),
            record.prompt_summary().clone(),
            payload,
            *record.created_at(),
        ))
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> VermeerResult<bool> {
        let Some(payload_path) = self.locate(id).await else {
            tracing::debug!("Artifact absent, delete is a no-op");
            return Ok(false);
        };

        for path in [Self::record_path(&payload_path), payload_path] {
            if let Err(e) = tokio::fs::remove_file(&path).await {
                if e.kind() != std::io::ErrorKind::NotFound {
                    return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                        "delete {}: {}",
                        path.display(),
                        e
                    )))
                    .into());
                }
            }
        }

        tracing::info!("Deleted artifact");
        Ok(true)
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> VermeerResult<Vec<ArtifactRecord>> {
        let mut records = Vec::new();

        for kind in [ArtifactKind::Image, ArtifactKind::Video, ArtifactKind::Audio] {
            let dir = self.base_path.join(Self::kind_dir(kind));
            let mut entries = match tokio::fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(StorageError::new(StorageErrorKind::Unavailable(format!(
                        "{}: {}",
                        dir.display(),
                        e
                    )))
                    .into());
                }
            };

            while let Some(entry) = entries.next_entry().await.map_err(|e| {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    dir.display(),
                    e
                )))
            })? {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) != Some("json") {
                    continue;
                }
                match Self::read_record(&path).await {
                    Ok(record) => records.push(record),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Skipping undecodable record");
                    }
                }
            }
        }

        Ok(records)
    }

    #[tracing::instrument(skip(self))]
    async fn clear(&self) -> VermeerResult<usize> {
        let mut removed = 0;

        for kind in [ArtifactKind::Image, ArtifactKind::Video, ArtifactKind::Audio] {
            let dir = self.base_path.join(Self::kind_dir(kind));
            let mut entries = match tokio::fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(StorageError::new(StorageErrorKind::Unavailable(format!(
                        "{}: {}",
                        dir.display(),
                        e
                    )))
                    .into());
                }
            };

            while let Some(entry) = entries.next_entry().await.map_err(|e| {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    dir.display(),
                    e
                )))
            })? {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) == Some("json") {
                    removed += 1;
                }
                if let Err(e) = tokio::fs::remove_file(&path).await {
                    if e.kind() != std::io::ErrorKind::NotFound {
                        return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                            "delete {}: {}",
                            path.display(),
                            e
                        )))
                        .into());
                    }
                }
            }
        }

        tracing::info!(removed, "Cleared artifact store");
        Ok(removed)
    }

    #[tracing::instrument(skip(self))]
    async fn exists(&self, id: Uuid) -> VermeerResult<bool> {
        Ok(self.locate(id).await.is_some())
    }
}
