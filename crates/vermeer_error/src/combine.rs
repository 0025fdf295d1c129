//! Combine pipeline error types.

/// Kinds of combine pipeline errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CombineErrorKind {
    /// The transcoding engine is unavailable for this session
    #[display("Video engine unavailable: {}", _0)]
    EngineUnavailable(String),
    /// Readiness polling exhausted its attempt budget
    #[display("Video engine not detected after {attempts} attempts (~{waited_secs}s)")]
    InitTimeout {
        /// Number of readiness probes performed
        attempts: u32,
        /// Approximate seconds spent waiting
        waited_secs: u64,
    },
    /// The engine core failed to load
    #[display("Failed to load video engine core: {}", _0)]
    LoadFailed(String),
    /// The session is not ready to run a combine
    #[display("Video engine not ready (status: {})", _0)]
    NotReady(String),
    /// Fewer than two sources were supplied
    #[display("At least 2 videos are required to combine, got {}", _0)]
    TooFewSources(usize),
    /// A source could not be staged into the engine filesystem
    #[display("Failed to stage video {position}: {detail}")]
    StagingFailed {
        /// 1-based position of the offending source
        position: usize,
        /// Underlying failure description
        detail: String,
    },
    /// The concatenation transform failed
    #[display("Video merge failed: {}", _0)]
    TransformFailed(String),
    /// The transform output could not be read back
    #[display("Failed to read merged output: {}", _0)]
    OutputUnreadable(String),
}

/// Combine pipeline error with location tracking.
///
/// # Examples
///
/// ```
/// use vermeer_error::{CombineError, CombineErrorKind};
///
/// let err = CombineError::new(CombineErrorKind::TooFewSources(1));
/// assert!(format!("{}", err).contains("At least 2"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Combine Error: {} at line {} in {}", kind, line, file)]
pub struct CombineError {
    /// The kind of error that occurred
    pub kind: CombineErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CombineError {
    /// Create a new combine error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CombineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True when the error is a precondition failure (no work was started).
    pub fn is_precondition(&self) -> bool {
        matches!(
            self.kind,
            CombineErrorKind::NotReady(_) | CombineErrorKind::TooFewSources(_)
        )
    }
}
