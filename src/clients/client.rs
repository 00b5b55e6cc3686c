//! The configured API client.
//!
//! A [`Client`] bundles everything a request needs beyond its own path and
//! parameters: the [`AdsConfig`], the user [`Credentials`], the
//! [`Authorizer`] that signs requests and the [`HttpTransport`] that sends
//! them. It is cheap to clone and shared by every resource loaded through it.

use std::fmt;
use std::sync::Arc;

use crate::auth::{Authorizer, Credentials, OAuth1Authorizer};
use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::transport::{HttpTransport, ReqwestTransport};
use crate::config::AdsConfig;
use crate::rest::Context;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shared handle to a configured Ads API client.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`; clones share the same transport and signer.
///
/// # Example
///
/// ```rust
/// use twitter_ads::{
///     AccessToken, AccessTokenSecret, AdsConfig, Client, ConsumerKey, ConsumerSecret,
///     Credentials,
/// };
///
/// let config = AdsConfig::builder()
///     .consumer_key(ConsumerKey::new("consumer-key").unwrap())
///     .consumer_secret(ConsumerSecret::new("consumer-secret").unwrap())
///     .sandbox(true)
///     .build()
///     .unwrap();
/// let credentials = Credentials::new(
///     AccessToken::new("access-token").unwrap(),
///     AccessTokenSecret::new("access-token-secret").unwrap(),
/// );
///
/// let client = Client::new(config, credentials).unwrap();
/// assert_eq!(client.base_url(), "https://ads-api-sandbox.twitter.com");
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: AdsConfig,
    credentials: Credentials,
    authorizer: Arc<dyn Authorizer>,
    transport: Arc<dyn HttpTransport>,
    user_agent: String,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a client that signs with OAuth 1.0a and sends over `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Connection`] if the HTTP backend cannot be built.
    pub fn new(config: AdsConfig, credentials: Credentials) -> Result<Self, HttpError> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, credentials, Arc::new(transport)))
    }

    /// Creates a client that signs with OAuth 1.0a and sends through `transport`.
    #[must_use]
    pub fn with_transport(
        config: AdsConfig,
        credentials: Credentials,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let authorizer = Arc::new(OAuth1Authorizer::new(&config, &credentials));
        Self::from_parts(config, credentials, authorizer, transport)
    }

    /// Creates a client from explicit collaborators.
    #[must_use]
    pub fn from_parts(
        config: AdsConfig,
        credentials: Credentials,
        authorizer: Arc<dyn Authorizer>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}twitter-ads-rust v{SDK_VERSION} | Rust {rust_version}");

        Self {
            inner: Arc::new(ClientInner {
                config,
                credentials,
                authorizer,
                transport,
                user_agent,
            }),
        }
    }

    /// Applies default headers and authorization to an outbound request.
    #[must_use]
    pub fn authorize(&self, mut request: HttpRequest) -> HttpRequest {
        request.set_header("User-Agent", self.inner.user_agent.clone());
        if request.header("Accept").is_none() {
            request.set_header("Accept", "application/json");
        }
        self.inner.authorizer.authorize(request)
    }

    /// Returns the transport requests are sent through.
    #[must_use]
    pub fn transport(&self) -> &dyn HttpTransport {
        self.inner.transport.as_ref()
    }

    /// Returns the API base URL, e.g. `https://ads-api.twitter.com`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.inner.config.api_host().as_ref()
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &AdsConfig {
        &self.inner.config
    }

    /// Returns the user credentials.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// Returns the `User-Agent` sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.inner.user_agent
    }

    /// Returns a root [`Context`] bound to this client.
    #[must_use]
    pub fn context(&self) -> Context {
        Context::new(self.clone())
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_host", &self.inner.config.api_host().as_ref())
            .field("credentials", &self.inner.credentials)
            .field("authorizer", &self.inner.authorizer)
            .field("transport", &self.inner.transport)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpMethod, HttpResponse, TransportError};
    use crate::config::{AccessToken, AccessTokenSecret, ConsumerKey, ConsumerSecret};

    #[derive(Debug)]
    struct NoopTransport;

    impl HttpTransport for NoopTransport {
        fn send(&self, _request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            Ok(HttpResponse::new(200, Default::default(), "{}"))
        }
    }

    fn client(prefix: Option<&str>) -> Client {
        let mut builder = AdsConfig::builder()
            .consumer_key(ConsumerKey::new("ck").unwrap())
            .consumer_secret(ConsumerSecret::new("cs").unwrap());
        if let Some(prefix) = prefix {
            builder = builder.user_agent_prefix(prefix);
        }
        Client::with_transport(
            builder.build().unwrap(),
            Credentials::new(
                AccessToken::new("at").unwrap(),
                AccessTokenSecret::new("ats").unwrap(),
            ),
            Arc::new(NoopTransport),
        )
    }

    #[test]
    fn test_user_agent_format() {
        let ua = client(None).user_agent().to_string();
        assert!(ua.starts_with("twitter-ads-rust v"));
        assert!(ua.contains(SDK_VERSION));
        assert!(ua.contains("| Rust "));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let ua = client(Some("MyApp/1.0")).user_agent().to_string();
        assert!(ua.starts_with("MyApp/1.0 | twitter-ads-rust v"));
    }

    #[test]
    fn test_authorize_sets_default_headers_and_signature() {
        let request = HttpRequest::builder(HttpMethod::Get, "https://ads-api.twitter.com/0/accounts")
            .build()
            .unwrap();

        let signed = client(None).authorize(request);

        assert_eq!(signed.header("Accept"), Some("application/json"));
        assert!(signed.header("User-Agent").unwrap().contains("twitter-ads-rust"));
        assert!(signed.header("Authorization").unwrap().starts_with("OAuth "));
    }

    #[test]
    fn test_base_url_defaults_to_production() {
        assert_eq!(client(None).base_url(), "https://ads-api.twitter.com");
    }

    #[test]
    fn test_debug_hides_token_secret() {
        let debug = format!("{:?}", client(None));
        assert!(debug.contains("Client"));
        assert!(!debug.contains("\"ats\""));
    }
}
