//! Single-use API requests.
//!
//! A [`Request`] describes one HTTP call against a resource endpoint and
//! knows how to execute it. [`Request::perform`] consumes the value, so a
//! request is executed at most once and results in exactly one transport
//! call. Nothing is retried.

use serde_json::Value;

use crate::clients::{Client, DataType, HttpError, HttpMethod, HttpRequest};
use crate::rest::params::Params;
use crate::rest::response::Response;

/// One HTTP call against the Ads API.
///
/// `path` is relative to the client's API host and must have its
/// placeholders already resolved.
///
/// # Example
///
/// ```rust,ignore
/// use twitter_ads::rest::{Params, Request};
/// use twitter_ads::HttpMethod;
///
/// let response = Request::new(&client, HttpMethod::Get, "/0/accounts", Params::new().set("count", 2))
///     .perform()?;
/// println!("{}", response.body());
/// ```
#[derive(Clone, Debug)]
pub struct Request {
    client: Client,
    method: HttpMethod,
    path: String,
    params: Params,
    body: Option<Value>,
}

impl Request {
    /// Creates a request without a body.
    #[must_use]
    pub fn new(client: &Client, method: HttpMethod, path: impl Into<String>, params: Params) -> Self {
        Self {
            client: client.clone(),
            method,
            path: path.into(),
            params,
            body: None,
        }
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Returns a copy of the request with one more query parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl std::fmt::Display) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the resolved path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query parameters.
    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// Returns the body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Executes the request.
    ///
    /// The request is authorized by the client and sent through its
    /// transport exactly once.
    ///
    /// # Errors
    ///
    /// - [`HttpError::Connection`] if the transport fails (including timeouts)
    /// - [`HttpError::Response`] for a non-2xx status
    /// - [`HttpError::Decode`] for a 2xx response with a malformed body
    /// - [`HttpError::InvalidRequest`] if a POST or PUT has no body
    pub fn perform(self) -> Result<Response, HttpError> {
        let url = format!("{}{}", self.client.base_url(), self.path);

        let mut builder = HttpRequest::builder(self.method, url).query(self.params);
        if let Some(body) = self.body {
            builder = builder.body(body).body_type(DataType::Json);
        }
        let request = self.client.authorize(builder.build()?);

        let raw = self.client.transport().send(&request)?;
        tracing::debug!(
            method = self.method.as_str(),
            path = %self.path,
            status = raw.code,
            request_id = raw.request_id().unwrap_or_default(),
            "performed request"
        );

        if let Some(limit) = raw.rate_limit().filter(|l| l.is_exhausted()) {
            tracing::warn!(
                path = %self.path,
                limit = limit.limit,
                reset = ?limit.reset,
                "rate limit exhausted"
            );
        }

        Response::from_http(raw)
    }
}
