// src/core/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

/// Failures inside a provider. Never crosses the provider boundary:
/// `ProfileProvider::fetch` turns it into `ProviderOutput::Failed`.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error (status {status}): {url}")]
    Status { status: u16, url: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}
