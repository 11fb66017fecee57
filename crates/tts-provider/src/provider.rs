use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TtsProviderError;

/// Supported TTS providers for custom provider integration
///
/// The tag set is closed: a value of this type is always one of the
/// lowercase strings `"baseten"` or `"vertex"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TtsProvider {
    /// Baseten (requires the mars-8-pro model)
    Baseten,
    /// Google Vertex AI
    Vertex,
}

impl TtsProvider {
    /// Canonical string tag for this provider
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Baseten => "baseten",
            Self::Vertex => "vertex",
        }
    }
}

impl FromStr for TtsProvider {
    type Err = TtsProviderError;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s {
            "baseten" => Ok(Self::Baseten),
            "vertex" => Ok(Self::Vertex),
            other => Err(TtsProviderError::InvalidProviderTag(other.to_string())),
        }
    }
}
