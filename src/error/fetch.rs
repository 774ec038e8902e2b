//! Failure of the startup story fetch.

use crate::traits::HttpError;
use thiserror::Error;

/// Any failure of the single outbound search request.
///
/// The variants only differ in how they describe themselves; the UI shows
/// the `Display` text and nothing else.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error("Server error ({status})")]
    Status { status: u16 },

    /// The body was not JSON, or lacked the `hits` list.
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Transport(HttpError::ConnectionFailed(_)) => "E_FETCH_CONN",
            FetchError::Transport(HttpError::Timeout(_)) => "E_FETCH_TIMEOUT",
            FetchError::Transport(_) => "E_FETCH_TRANSPORT",
            FetchError::Status { .. } => "E_FETCH_STATUS",
            FetchError::Decode(_) => "E_FETCH_DECODE",
        }
    }
}

/// Result alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
