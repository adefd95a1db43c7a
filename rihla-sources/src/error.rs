use thiserror::Error;

/// Result alias for source-fetch operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Error type surfaced by the back-office API client.
///
/// Record-level problems (unparseable amounts or dates, missing text
/// fields) are never errors; the adapters degrade those in place so the
/// affected row stays visible. This type covers only the transport.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {status} from {endpoint}")]
    Status {
        status: reqwest::StatusCode,
        endpoint: String,
    },
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            Self::Decode(value.to_string())
        } else {
            Self::Transport(value.to_string())
        }
    }
}
