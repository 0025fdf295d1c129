//! Artifact kind types.

use serde::{Deserialize, Serialize};

/// Kind of generated media content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Image content (PNG, JPEG, WebP, etc.)
    Image,
    /// Video content (MP4, WebM, etc.)
    Video,
    /// Audio content (MP3, WAV, OGG, etc.)
    Audio,
}

impl ArtifactKind {
    /// Convert to string representation for records and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Image => "image",
            ArtifactKind::Video => "video",
            ArtifactKind::Audio => "audio",
        }
    }
}

impl std::str::FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(ArtifactKind::Image),
            "video" => Ok(ArtifactKind::Video),
            "audio" => Ok(ArtifactKind::Audio),
            _ => Err(format!("Unknown artifact kind: {}", s)),
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
