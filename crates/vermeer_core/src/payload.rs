//! Artifact payload types.

use derive_getters::Getters;

/// Owned binary payload of a generated artifact.
///
/// The payload is exclusively owned by its cache entry and is released when
/// the entry is evicted or deleted.
///
/// # Examples
///
/// ```
/// use vermeer_core::ArtifactPayload;
///
/// let payload = ArtifactPayload::new(vec![0x00, 0x00, 0x00, 0x18], "video/mp4");
/// assert_eq!(payload.len(), 4);
/// assert_eq!(payload.mime_type(), "video/mp4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ArtifactPayload {
    /// Raw media bytes
    bytes: Vec<u8>,
    /// MIME type (e.g., "image/png", "video/mp4")
    mime_type: String,
}

impl ArtifactPayload {
    /// Create a new payload from raw bytes and a MIME type.
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Byte length of the payload.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the payload holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the payload, returning the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
