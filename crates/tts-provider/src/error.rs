use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsProviderError>;

/// TTS provider tag errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TtsProviderError {
    /// Input is not one of the supported provider tags
    #[error("Invalid TTS provider tag: '{0}'")]
    InvalidProviderTag(String),
}
