//! The **boundary** between use cases and the HTTP API.
//!
//! Use cases talk to a [`RequestSender`], which promises to return either a
//! successful response or the single error that remains after all retries.
//! A [`Transport`] sits underneath and performs exactly one exchange per call.
//!
//! **Architectural Note:**
//! Use cases must depend on [`RequestSender`] only. This keeps retry policy and
//! transport details swappable, and lets tests inject a scripted sender.

use std::time::Duration;

use appctl_common::error::ApiError;
use appctl_common::models::ErrorBody;
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

mod retry;

pub use retry::{RetryPolicy, RetryingSender};

const MAX_ERROR_BODY_CHARS: usize = 512;

/// A single API call, independent of the transport that carries it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Resource path relative to the API base URL, e.g. `applications`.
    pub path: String,
    pub body: Option<serde_json::Value>,
    /// Repeated unchanged on every attempt so the server can drop duplicates.
    pub idempotency_key: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            body: None,
            idempotency_key: None,
        }
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Methods whose repetition could create a second resource.
    pub fn needs_idempotency_key(&self) -> bool {
        self.method == Method::POST || self.method == Method::PATCH
    }
}

/// Raw outcome of one exchange. Non-success statuses are still `Ok` at this level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
    pub retry_after: Option<Duration>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            retry_after: None,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Converts a non-success response into [`ApiError::Status`].
    ///
    /// Structured `{"code", "message"}` bodies are unpacked, anything else is
    /// reported as-is (truncated). `Retry-After` is kept for 429 and 503 only.
    pub fn into_error(self) -> ApiError {
        let message = match serde_json::from_str::<ErrorBody>(&self.body) {
            Ok(body) => body.to_string(),
            Err(_) if self.body.trim().is_empty() => StatusCode::from_u16(self.status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("no response body")
                .to_string(),
            Err(_) => self.body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        };
        ApiError::Status {
            status: self.status,
            message,
            retry_after: self.retry_after.filter(|_| honours_retry_after(self.status)),
        }
    }
}

fn honours_retry_after(status: u16) -> bool {
    matches!(status, 429 | 503)
}

/// Sends a request and returns the final, post-retry outcome.
///
/// Implementations return `Ok` only for success statuses.
#[async_trait]
pub trait RequestSender: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Performs exactly one HTTP exchange, no retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// A successful exchange with its body decoded.
#[derive(Debug)]
pub struct Exchange<R> {
    pub status: u16,
    pub raw_body: String,
    /// `None` when the body was blank or JSON `null`.
    pub decoded: Option<R>,
}

/// Serializes `body`, sends it through `sender` and decodes the response into `R`.
pub async fn send_json<S, B, R>(
    sender: &S,
    method: Method,
    path: &str,
    body: &B,
) -> Result<Exchange<R>, ApiError>
where
    S: RequestSender + ?Sized,
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = sender
        .send(ApiRequest::new(method, path).with_body(body))
        .await?;
    let decoded = decode_body(&response.body)?;

    Ok(Exchange {
        status: response.status,
        raw_body: response.body,
        decoded,
    })
}

fn decode_body<R: DeserializeOwned>(raw: &str) -> Result<Option<R>, ApiError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<R>>(raw).map_err(|e| ApiError::Decode(e.to_string()))
}
