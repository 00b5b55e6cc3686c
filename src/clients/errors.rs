//! HTTP-specific error types for the Twitter Ads API SDK.
//!
//! This module contains error types for HTTP operations: transport failures,
//! non-2xx responses, undecodable bodies, and request validation failures.
//!
//! # Error Handling
//!
//! - [`TransportError`]: The request never produced a response (network, timeout, cancellation)
//! - [`HttpResponseError`]: A well-formed non-2xx response from the API
//! - [`DecodeError`]: A 2xx response whose body is not valid JSON
//! - [`InvalidHttpRequestError`]: A request that fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! No variant is retried by this crate. Callers that want a retry policy
//! (for example on [`HttpError::Connection`] or a 429 response) implement it
//! on top.
//!
//! # Example
//!
//! ```rust,ignore
//! use twitter_ads::clients::HttpError;
//!
//! match request.perform() {
//!     Ok(response) => println!("Success: {}", response.body()),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.body),
//!     Err(HttpError::Connection(e)) => println!("Connection failed: {}", e),
//!     Err(HttpError::Decode(e)) => println!("Bad body: {}", e),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API answers with a non-2xx status.
///
/// The decoded body is kept verbatim. When the body is not JSON it is
/// wrapped as `{"raw_body": "..."}`.
///
/// # Example
///
/// ```rust
/// use twitter_ads::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError {
///     code: 400,
///     body: json!({"errors": [{"code": "INVALID_PARAMETER"}]}),
///     request_id: Some("abc-123".to_string()),
/// };
///
/// assert!(error.to_string().contains("400"));
/// assert!(error.to_string().contains("INVALID_PARAMETER"));
/// ```
#[derive(Debug, Error)]
#[error("API responded with status {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The decoded response body.
    pub body: serde_json::Value,
    /// Request ID for error reporting (from `x-request-id` / `x-transaction-id`).
    pub request_id: Option<String>,
}

impl HttpResponseError {
    /// Returns the API error codes listed in the body, if any.
    ///
    /// The Ads API reports failures as `{"errors": [{"code": "...", "message": "..."}]}`.
    #[must_use]
    pub fn error_codes(&self) -> Vec<&str> {
        self.body
            .get("errors")
            .and_then(serde_json::Value::as_array)
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| e.get("code").and_then(serde_json::Value::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Error returned when a request fails at the transport level.
///
/// Covers connection failures, timeouts, and transport-level cancellation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    timeout: bool,
}

impl TransportError {
    /// Creates a transport error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timeout: false,
        }
    }

    /// Creates a transport error caused by a timeout.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timeout: true,
        }
    }

    /// Returns `true` if the failure was a timeout.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        self.timeout
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::timeout(error.to_string())
        } else {
            Self::new(error.to_string())
        }
    }
}

/// Error returned when a successful response carries a malformed body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to decode response body (status {code}): {message}")]
pub struct DecodeError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The decoder's description of the problem.
    pub message: String,
}

/// Error returned when an HTTP request fails validation.
///
/// # Example
///
/// ```rust
/// use twitter_ads::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The transport failed before a response arrived.
    #[error("Connection error: {0}")]
    Connection(#[from] TransportError),

    /// A non-2xx HTTP response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// A 2xx response whose body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl HttpError {
    /// Returns the HTTP status code associated with this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Decode(e) => Some(e.code),
            Self::Connection(_) | Self::InvalidRequest(_) => None,
        }
    }
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
