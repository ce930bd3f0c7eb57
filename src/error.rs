use thiserror::Error;

use crate::translate::ProviderKind;

#[derive(Error, Debug)]
pub enum TerjemahError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} unavailable: {reason}")]
    ProviderUnavailable {
        provider: ProviderKind,
        reason: String,
    },

    #[error("Input text is empty")]
    EmptyInput,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TerjemahError {
    pub fn unavailable(provider: ProviderKind, reason: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            provider,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TerjemahError>;
