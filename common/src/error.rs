use std::time::Duration;

use thiserror::Error;

/// Final outcome of a failed API exchange.
///
/// Every variant except [`ApiError::EmptyResponse`] originates in the request
/// sender. `EmptyResponse` is produced by callers that received a success
/// status but nothing usable in the body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("server returned {status}: {message}")]
    Status {
        status: u16,
        message: String,
        retry_after: Option<Duration>,
    },

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("empty response")]
    EmptyResponse,
}

impl ApiError {
    /// Builds a status error without a `Retry-After` hint.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        ApiError::Status {
            status,
            message: message.into(),
            retry_after: None,
        }
    }

    /// Whether sending the same request again may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) | ApiError::Timeout => true,
            ApiError::Status { status, .. } => is_retryable_status(*status),
            ApiError::Encode(_) | ApiError::Decode(_) | ApiError::EmptyResponse => false,
        }
    }

    /// Server supplied delay before the next attempt, if any.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            ApiError::Status { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

pub fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
}
