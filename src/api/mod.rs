//! API client plumbing for the TrackingTime service.
//!
//! Every TrackingTime endpoint answers with the same wrapper: a `response`
//! object carrying a human-readable status message, plus an opaque `data`
//! payload whose shape depends on the endpoint (a task list, a single task,
//! or nothing at all). [`ApiResponse`] models that wrapper and decodes it in
//! two steps: the outer envelope first, then the payload into whatever shape
//! the caller asks for.
//!
//! ## Usage
//!
//! ```rust
//! use ttrack::api::ApiResponse;
//!
//! let body = br#"{"response":{"message":"Tracking started"},"data":null}"#;
//! let response = ApiResponse::from_bytes(body)?;
//! assert_eq!(response.message(), "Tracking started");
//! # Ok::<(), ttrack::api::ApiError>(())
//! ```

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::value::RawValue;
use thiserror::Error;

pub mod tracking_time;

pub use tracking_time::TrackingTime;

/// Errors produced while talking to the TrackingTime API.
///
/// Every variant is fatal to the current command: the tool performs exactly
/// one user-initiated action per invocation, so there is nothing to retry or
/// recover. Errors propagate to `main`, get logged, and the process exits
/// non-zero.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP request itself failed (DNS, connection, timeout, body read).
    #[error("request to TrackingTime failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not a valid envelope, or the payload does not
    /// match the shape the caller asked for.
    #[error("failed to decode TrackingTime response: {0}")]
    Decode(#[source] serde_json::Error),

    /// A payload shape was requested but the envelope carried no payload.
    #[error("TrackingTime response has no payload")]
    MissingPayload,
}

/// Status part of the response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseStatus {
    /// Human-readable outcome reported by the server. Present on every
    /// response, including ones without a payload.
    pub message: String,
}

/// Uniform envelope around every TrackingTime API response.
///
/// The payload is kept as raw JSON and re-decoded on demand because its
/// structure varies by endpoint while the wrapper stays the same.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub response: ResponseStatus,
    #[serde(default)]
    data: Option<Box<RawValue>>,
}

impl ApiResponse {
    /// Decodes the outer envelope from raw response bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    /// Decodes the opaque payload into the requested shape.
    ///
    /// Fails with [`ApiError::MissingPayload`] when the envelope carried no
    /// `data` (or an explicit `null`), and with [`ApiError::Decode`] when the
    /// payload structure does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        match &self.data {
            Some(raw) => serde_json::from_str(raw.get()).map_err(ApiError::Decode),
            None => Err(ApiError::MissingPayload),
        }
    }

    /// The server's status message.
    pub fn message(&self) -> &str {
        &self.response.message
    }
}
