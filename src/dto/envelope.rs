//! The `{code, message, data, timestamp}` wrapper around every response body.

use chrono::Utc;
use serde::{Deserialize, Serialize};

pub const CODE_OK: i32 = 200;
pub const CODE_CREATED: i32 = 201;

/// Only 200 and 201 carry a usable payload.
pub const fn is_success_code(code: i32) -> bool {
    code == CODE_OK || code == CODE_CREATED
}

/// Envelope returned by every backend endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: T,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        is_success_code(self.code)
    }

    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::with_code(CODE_OK, data, message)
    }

    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::with_code(CODE_CREATED, data, message)
    }

    pub fn with_code(code: i32, data: T, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl ApiResponse<Option<()>> {
    /// Failure envelope without a payload (`data: null`).
    pub fn error(code: i32, message: impl Into<String>) -> Self {
        Self::with_code(code, None, message)
    }
}

/// Loosely typed envelope used to read `code`/`message` from bodies whose
/// `data` does not match the expected shape (error responses).
#[derive(Clone, Debug, Deserialize)]
pub struct EnvelopeHead {
    pub code: i32,
    #[serde(default)]
    pub message: String,
}
