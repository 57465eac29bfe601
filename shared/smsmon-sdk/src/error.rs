//! Error types for the SMS monitoring SDK

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Client-side view of everything that can go wrong talking to the backend.
///
/// The taxonomy is the transport layer's: connection failures, non-2xx
/// statuses, and payload-decoding failures. The client never retries; whether
/// `delete` or status updates are idempotent on retry is owned by the backend
/// contract.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
