//! # Twitter Ads API Rust SDK
//!
//! A Rust SDK for the Twitter Ads API. It maps the API's JSON resource graph
//! (accounts, campaigns, line items, audiences, ...) onto typed local objects
//! with declarative property schemas and lazy, cursor-based pagination.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`AdsConfig`] and [`AdsConfigBuilder`]
//! - Validated newtypes for consumer and access credentials
//! - OAuth 1.0a request signing via [`auth::OAuth1Authorizer`]
//! - A blocking HTTP layer behind the [`HttpTransport`] seam
//! - The resource core in [`rest`]: [`Resource`](rest::Resource),
//!   [`Cursor`](rest::Cursor), [`Request`](rest::Request) and
//!   [`PropertySchema`](rest::PropertySchema)
//! - Concrete resources in [`rest::resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use twitter_ads::{
//!     AccessToken, AccessTokenSecret, AdsConfig, Client, ConsumerKey, ConsumerSecret,
//!     Credentials,
//! };
//!
//! let config = AdsConfig::builder()
//!     .consumer_key(ConsumerKey::new("your-consumer-key").unwrap())
//!     .consumer_secret(ConsumerSecret::new("your-consumer-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let credentials = Credentials::new(
//!     AccessToken::new("your-access-token").unwrap(),
//!     AccessTokenSecret::new("your-access-token-secret").unwrap(),
//! );
//!
//! let client = Client::new(config, credentials).unwrap();
//! ```
//!
//! ## Loading Resources
//!
//! ```rust,ignore
//! use twitter_ads::rest::{Params, Resource};
//! use twitter_ads::rest::resources::Account;
//!
//! let ctx = client.context();
//!
//! // One account by id
//! let account = Account::load(&ctx, "18ce54d4x5t", Params::new())?;
//!
//! // All accounts, fetched a page at a time as the cursor is consumed
//! for account in Account::all(&ctx, Params::new().set("count", 20))? {
//!     println!("{:?}", account?.name());
//! }
//!
//! // Resources nested under the account
//! let line_items = account.line_items(None, Params::new())?;
//! ```
//!
//! ## Execution Model
//!
//! Every request blocks the calling thread until the response arrives.
//! There is no background prefetching and no retry: each
//! [`Request::perform`](rest::Request::perform) is exactly one transport call.
//! From async code, run SDK calls on a blocking thread.
//!
//! ## Logging
//!
//! The SDK emits [`tracing`] events (`debug` per request, `warn` when a rate
//! limit is exhausted, `trace` for cursor page transitions). Install a
//! subscriber in your application to see them.

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{Authorizer, Credentials};
pub use config::{
    AccessToken, AccessTokenSecret, AdsConfig, AdsConfigBuilder, ApiHost, ConsumerKey,
    ConsumerSecret,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    Client, DataType, DecodeError, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, HttpTransport, InvalidHttpRequestError, RateLimit,
    ReqwestTransport, TransportError,
};
