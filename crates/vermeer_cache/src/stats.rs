//! Cache statistics types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use vermeer_core::format_bytes;

/// Raw cache statistics.
///
/// # Examples
///
/// ```
/// use vermeer_cache::CacheStats;
///
/// let stats = CacheStats::new(250 * 1024 * 1024, 12);
/// assert_eq!(stats.percent_of(500 * 1024 * 1024), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct CacheStats {
    /// Sum of payload sizes over all live entries
    total_size_bytes: u64,
    /// Number of live entries
    count: usize,
}

impl CacheStats {
    /// Create stats from a total size and entry count.
    pub fn new(total_size_bytes: u64, count: usize) -> Self {
        Self {
            total_size_bytes,
            count,
        }
    }

    /// Zero-valued stats, reported when the storage layer is unavailable.
    pub fn empty() -> Self {
        Self::new(0, 0)
    }

    /// Percentage of a byte budget in use, rounded to the nearest whole
    /// number. May exceed 100 while eviction is catching up.
    pub fn percent_of(&self, budget_bytes: u64) -> u32 {
        if budget_bytes == 0 {
            return 0;
        }
        ((self.total_size_bytes as f64 / budget_bytes as f64) * 100.0).round() as u32
    }
}

/// Human-readable cache statistics for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct FormattedStats {
    /// Total size as a byte label (e.g., "12.4 MB")
    size_label: String,
    /// Number of live entries
    count: usize,
}

impl FormattedStats {
    /// Format raw stats for display.
    pub fn from_stats(stats: &CacheStats) -> Self {
        Self {
            size_label: format_bytes(*stats.total_size_bytes()),
            count: *stats.count(),
        }
    }
}
