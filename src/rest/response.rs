//! Decoded API responses.
//!
//! A [`Response`] is what a successfully performed
//! [`Request`](crate::rest::Request) produces: the status, the decoded JSON
//! body and the metadata the resource layer needs (the pagination token,
//! the request id and rate limit state).
//!
//! The Ads API wraps every payload in an envelope:
//!
//! ```json
//! { "data": [ ... ], "next_cursor": "c-1", "total_count": 42, "request": { ... } }
//! ```

use serde_json::{json, Value};

use crate::clients::{DecodeError, HttpError, HttpResponse, HttpResponseError, RateLimit};

/// A decoded 2xx response.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use twitter_ads::clients::HttpResponse;
/// use twitter_ads::rest::Response;
///
/// let raw = HttpResponse::new(200, HashMap::new(), r#"{"data": [{"id": "a"}], "next_cursor": "tok1"}"#);
/// let response = Response::from_http(raw).unwrap();
///
/// assert_eq!(response.status(), 200);
/// assert_eq!(response.pagination_token(), Some("tok1"));
/// assert_eq!(response.data().unwrap()[0]["id"], "a");
/// ```
#[derive(Clone, Debug)]
pub struct Response {
    status: u16,
    body: Value,
    pagination_token: Option<String>,
    request_id: Option<String>,
    rate_limit: Option<RateLimit>,
}

impl Response {
    /// Decodes a raw transport response.
    ///
    /// Non-2xx responses become [`HttpError::Response`]; their body is kept
    /// as JSON when it parses, or wrapped as `{"raw_body": "..."}` when it
    /// does not. An empty 2xx body decodes as `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] for non-2xx statuses and
    /// [`HttpError::Decode`] for a 2xx response whose body is not JSON.
    pub fn from_http(response: HttpResponse) -> Result<Self, HttpError> {
        let request_id = response.request_id().map(ToString::to_string);
        let rate_limit = response.rate_limit();
        let text = response.body.trim();

        if !response.is_ok() {
            let body = if text.is_empty() {
                Value::Null
            } else {
                serde_json::from_str(text).unwrap_or_else(|_| json!({ "raw_body": text }))
            };
            return Err(HttpError::Response(HttpResponseError {
                code: response.code,
                body,
                request_id,
            }));
        }

        let body: Value = if text.is_empty() {
            json!({})
        } else {
            serde_json::from_str(text).map_err(|e| DecodeError {
                code: response.code,
                message: e.to_string(),
            })?
        };

        let pagination_token = body
            .get("next_cursor")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .map(ToString::to_string);

        Ok(Self {
            status: response.code,
            body,
            pagination_token,
            request_id,
            rate_limit,
        })
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the decoded body.
    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.body
    }

    /// Consumes the response and returns the decoded body.
    #[must_use]
    pub fn into_body(self) -> Value {
        self.body
    }

    /// Consumes the response and returns the envelope's `data` member, or
    /// `null` if there is none.
    #[must_use]
    pub fn into_data(mut self) -> Value {
        self.body
            .get_mut("data")
            .map(Value::take)
            .unwrap_or_default()
    }

    /// Returns the envelope's `data` member.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.body.get("data")
    }

    /// Returns the token for the next page, if the server sent one.
    #[must_use]
    pub fn pagination_token(&self) -> Option<&str> {
        self.pagination_token.as_deref()
    }

    /// Returns the envelope's `total_count` member.
    #[must_use]
    pub fn total_count(&self) -> Option<u64> {
        self.body.get("total_count").and_then(Value::as_u64)
    }

    /// Returns the request ID from the response headers.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Returns rate limit information from the response headers.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<RateLimit> {
        self.rate_limit
    }
}
