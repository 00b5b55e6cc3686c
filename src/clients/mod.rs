//! HTTP client types for the Twitter Ads API.
//!
//! This module provides the wire layer underneath the resource model:
//! request and response types, the transport seam and the shared
//! [`Client`] handle that signs and sends requests.
//!
//! # Overview
//!
//! - [`Client`]: Configured, cloneable API client
//! - [`HttpTransport`]: Blocking I/O seam, one attempt per call
//! - [`ReqwestTransport`]: Production transport backed by `reqwest`
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`HttpError`]: Everything that can go wrong on the wire
//!
//! # Example
//!
//! ```rust
//! use twitter_ads::clients::{HttpMethod, HttpRequest};
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "https://ads-api.twitter.com/0/accounts")
//!     .query_param("with_deleted", "true")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(request.query.len(), 1);
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Each request results in exactly one transport call;
//! failures surface to the caller, who decides whether to try again.

mod client;
mod errors;
mod http_request;
mod http_response;
mod transport;

pub use client::{Client, SDK_VERSION};
pub use errors::{
    DecodeError, HttpError, HttpResponseError, InvalidHttpRequestError, TransportError,
};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};
pub use transport::{HttpTransport, ReqwestTransport};
