//! Authentication types for the Twitter Ads API SDK.
//!
//! The SDK core consumes authentication through a single seam, the
//! [`Authorizer`] trait: given an outbound [`HttpRequest`], return it with
//! credentials attached. [`OAuth1Authorizer`] implements OAuth 1.0a
//! HMAC-SHA1 signing, which is what the Ads API expects.
//!
//! # Overview
//!
//! - [`Credentials`]: The user-level access token pair
//! - [`Authorizer`]: Attaches credentials to an outbound request
//! - [`OAuth1Authorizer`]: OAuth 1.0a request signing
//!
//! # Example
//!
//! ```rust
//! use twitter_ads::{AccessToken, AccessTokenSecret, Credentials};
//!
//! let credentials = Credentials::new(
//!     AccessToken::new("370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb").unwrap(),
//!     AccessTokenSecret::new("LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE").unwrap(),
//! );
//!
//! // The token secret never shows up in debug output
//! assert!(!format!("{credentials:?}").contains("LswwdoUaIvS8"));
//! ```

pub mod oauth1;

use std::fmt;

use crate::clients::HttpRequest;
use crate::config::{AccessToken, AccessTokenSecret};

pub use oauth1::OAuth1Authorizer;

/// The access token pair identifying the user on whose behalf requests are made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    /// The user access token.
    pub access_token: AccessToken,
    /// The user access token secret.
    pub access_token_secret: AccessTokenSecret,
}

impl Credentials {
    /// Creates a new credentials pair.
    #[must_use]
    pub const fn new(access_token: AccessToken, access_token_secret: AccessTokenSecret) -> Self {
        Self {
            access_token,
            access_token_secret,
        }
    }
}

/// Attaches credentials or a signature to an outbound request.
///
/// The signing algorithm is entirely the implementor's concern; the SDK only
/// calls [`authorize`](Self::authorize) once per request, immediately before
/// the request is handed to the transport.
pub trait Authorizer: Send + Sync + fmt::Debug {
    /// Returns the request with authorization applied.
    fn authorize(&self, request: HttpRequest) -> HttpRequest;
}

// Verify Credentials is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Credentials>();
};
