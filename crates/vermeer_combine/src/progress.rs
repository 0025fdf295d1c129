//! Combine progress reporting.

use regex::Regex;
use std::sync::LazyLock;

/// Coarse progress reports emitted during initialization and combine runs.
///
/// Progress is a best-effort enhancement for display; the combine contract
/// succeeds or fails independently of whether any progress is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombineProgress {
    /// Still waiting for the engine capability to appear
    WaitingForEngine {
        /// Approximate seconds spent waiting so far
        waited_secs: u64,
    },
    /// Engine detected, loading its core
    LoadingCore,
    /// Preparing a combine run
    Preparing,
    /// Staging one source into the engine filesystem
    Staging {
        /// 1-based index of the source being staged
        current: usize,
        /// Total number of sources
        total: usize,
    },
    /// Transform running
    Transforming {
        /// Elapsed-time marker scraped from engine logs, when one matched
        elapsed: Option<String>,
    },
    /// Reading the merged output back out of the engine
    Finishing,
}

/// Callback receiving progress reports.
pub type ProgressSink = Box<dyn Fn(CombineProgress) + Send + Sync>;

static TIME_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"time=(\d{2}:\d{2}:\d{2})").expect("valid time marker regex"));

/// Extract an elapsed-time marker from an engine log line.
///
/// Returns `None` when the line carries no marker; absence of a match is
/// never an error.
///
/// # Examples
///
/// ```
/// use vermeer_combine::parse_time_marker;
///
/// let line = "frame=  240 fps= 30 q=28.0 size=1024kB time=00:00:08.12 bitrate=1045.3kbits/s";
/// assert_eq!(parse_time_marker(line), Some("00:00:08".to_string()));
/// assert_eq!(parse_time_marker("Press [q] to stop"), None);
/// ```
pub fn parse_time_marker(line: &str) -> Option<String> {
    TIME_MARKER
        .captures(line)
        .map(|captures| captures[1].to_string())
}
