#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod provider;

pub use error::{Result, TtsProviderError};
pub use provider::TtsProvider;
