//! Artifact cache manager implementation.

use crate::{CacheConfig, CacheStats, FormattedStats};
use std::sync::Arc;
use uuid::Uuid;
use vermeer_core::Artifact;
use vermeer_error::VermeerResult;
use vermeer_storage::{ArtifactRecord, ArtifactStore};

/// Cache manager for generated artifacts.
///
/// Wraps a persistent [`ArtifactStore`] with size statistics and approximate
/// budget enforcement. Eviction removes the oldest entries by creation time
/// until the store is back under its ceiling, but never removes the entry
/// that was just inserted.
///
/// No cross-operation locking is performed: concurrent `put` calls are
/// last-write-wins by id, and eviction scans are not snapshot-isolated
/// against concurrent writes. The budget is best-effort, not a hard
/// guarantee.
pub struct CacheManager {
    config: CacheConfig,
    store: Arc<dyn ArtifactStore>,
}

impl CacheManager {
    /// Create a new cache manager over a storage backend.
    pub fn new(config: CacheConfig, store: Arc<dyn ArtifactStore>) -> Self {
        tracing::debug!(
            max_total_bytes = config.max_total_bytes(),
            "Creating new CacheManager"
        );
        Self { config, store }
    }

    /// The configuration this manager enforces.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Scan all live entries and sum their sizes.
    ///
    /// Fails soft: if the storage layer is unavailable the result is
    /// zero-valued stats, never an error. Stats are read on every view
    /// mount and must not take the UI down with them.
    #[tracing::instrument(skip(self))]
    pub async fn stats(&self) -> CacheStats {
        match self.store.list().await {
            Ok(records) => {
                let total = records.iter().map(|r| *r.size_bytes()).sum();
                CacheStats::new(total, records.len())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Cache stats unavailable, reporting empty");
                CacheStats::empty()
            }
        }
    }

    /// Stats with a human-readable size label.
    pub async fn formatted_stats(&self) -> FormattedStats {
        FormattedStats::from_stats(&self.stats().await)
    }

    /// Insert or overwrite an artifact, then enforce the byte ceiling.
    ///
    /// After insertion, entries are evicted oldest-first (ascending
    /// `created_at`, ties in scan order) until the total size is back under
    /// the ceiling or only the just-inserted entry remains.
    #[tracing::instrument(skip(self, artifact), fields(id = %artifact.id(), size = artifact.size_bytes()))]
    pub async fn put(&self, artifact: &Artifact) -> VermeerResult<ArtifactRecord> {
        let record = self.store.put(artifact).await?;
        self.enforce_budget(*record.id()).await?;
        Ok(record)
    }

    /// Load an artifact by id.
    pub async fn get(&self, id: Uuid) -> VermeerResult<Artifact> {
        self.store.get(id).await
    }

    /// Delete every entry. Idempotent; returns the number removed.
    #[tracing::instrument(skip(self))]
    pub async fn clear_all(&self) -> VermeerResult<usize> {
        let removed = self.store.clear().await?;
        tracing::info!(removed, "Cleared artifact cache");
        Ok(removed)
    }

    /// Delete a single entry if present.
    ///
    /// Returns `Ok(false)` when no entry has this id; a missing entry is
    /// not an error.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, id: Uuid) -> VermeerResult<bool> {
        self.store.delete(id).await
    }

    /// Evict oldest entries until the store is under budget.
    async fn enforce_budget(&self, just_inserted: Uuid) -> VermeerResult<()> {
        let budget = *self.config.max_total_bytes();
        let mut records = self.store.list().await?;
        let mut total: u64 = records.iter().map(|r| *r.size_bytes()).sum();
        if total <= budget {
            return Ok(());
        }

        // Stable sort: entries sharing a timestamp keep scan order.
        records.sort_by_key(|r| *r.created_at());

        for record in &records {
            if total <= budget {
                break;
            }
            if *record.id() == just_inserted {
                continue;
            }
            if self.store.delete(*record.id()).await? {
                total = total.saturating_sub(*record.size_bytes());
                tracing::info!(
                    id = %record.id(),
                    size = record.size_bytes(),
                    remaining = total,
                    "Evicted artifact over cache budget"
                );
            }
        }

        Ok(())
    }
}
