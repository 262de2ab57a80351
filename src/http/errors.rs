use thiserror::Error;

use crate::forms::FormError;
use crate::storage::StorageError;

/// Everything a console call can fail with.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Rejected locally before anything was sent.
    #[error("invalid input: {0}")]
    Form(#[from] FormError),

    /// The backend answered with a non-success envelope code.
    #[error("{message}")]
    Business { code: i32, message: String },

    /// Non-2xx HTTP status other than 401.
    #[error("request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The backend rejected our credentials; the session has been torn down.
    #[error("unauthorized - please login again")]
    Unauthorized,

    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("session storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Transport(e)
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
