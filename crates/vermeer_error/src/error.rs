//! Top-level error wrapper types.

use crate::{CombineError, ConfigError, StorageError};

/// This is the foundation error enum. Each Vermeer crate surfaces its
/// failures through one of these variants.
///
/// # Examples
///
/// ```
/// use vermeer_error::{VermeerError, StorageError, StorageErrorKind};
///
/// let storage_err = StorageError::new(StorageErrorKind::Unavailable("no backend".into()));
/// let err: VermeerError = storage_err.into();
/// assert!(format!("{}", err).contains("Storage Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VermeerErrorKind {
    /// Artifact storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Combine pipeline error
    #[from(CombineError)]
    Combine(CombineError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Vermeer error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vermeer_error::{VermeerResult, ConfigError};
///
/// fn might_fail() -> VermeerResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vermeer Error: {}", _0)]
pub struct VermeerError(Box<VermeerErrorKind>);

impl VermeerError {
    /// Create a new error from a kind.
    pub fn new(kind: VermeerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VermeerErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VermeerErrorKind
impl<T> From<T> for VermeerError
where
    T: Into<VermeerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vermeer operations.
///
/// # Examples
///
/// ```
/// use vermeer_error::{VermeerResult, CombineError, CombineErrorKind};
///
/// fn merge() -> VermeerResult<String> {
///     Err(CombineError::new(CombineErrorKind::TooFewSources(0)))?
/// }
/// ```
pub type VermeerResult<T> = std::result::Result<T, VermeerError>;
