//! Configuration types for the Twitter Ads API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`AdsConfig`]: The main configuration struct holding all SDK settings
//! - [`AdsConfigBuilder`]: A builder for constructing [`AdsConfig`] instances
//! - [`ConsumerKey`] / [`ConsumerSecret`]: Validated application credentials
//! - [`AccessToken`] / [`AccessTokenSecret`]: Validated user credentials
//! - [`ApiHost`]: A validated API host URL
//!
//! # Example
//!
//! ```rust
//! use twitter_ads::{AdsConfig, ConsumerKey, ConsumerSecret};
//!
//! let config = AdsConfig::builder()
//!     .consumer_key(ConsumerKey::new("my-consumer-key").unwrap())
//!     .consumer_secret(ConsumerSecret::new("my-consumer-secret").unwrap())
//!     .sandbox(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_host().as_ref(), "https://ads-api-sandbox.twitter.com");
//! ```

mod newtypes;

use std::time::Duration;

pub use newtypes::{AccessToken, AccessTokenSecret, ApiHost, ConsumerKey, ConsumerSecret};

use crate::error::ConfigError;

/// Default timeout applied by the transport to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Twitter Ads API SDK.
///
/// Holds the application credentials and transport settings. User-level
/// credentials live in [`Credentials`](crate::auth::Credentials) so that one
/// configuration can serve many authorized users.
///
/// # Thread Safety
///
/// `AdsConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct AdsConfig {
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
    api_host: ApiHost,
    sandbox: bool,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl AdsConfig {
    /// Creates a new builder for constructing an `AdsConfig`.
    #[must_use]
    pub fn builder() -> AdsConfigBuilder {
        AdsConfigBuilder::new()
    }

    /// Returns the consumer key.
    #[must_use]
    pub const fn consumer_key(&self) -> &ConsumerKey {
        &self.consumer_key
    }

    /// Returns the consumer secret.
    #[must_use]
    pub const fn consumer_secret(&self) -> &ConsumerSecret {
        &self.consumer_secret
    }

    /// Returns the API host requests are sent to.
    #[must_use]
    pub const fn api_host(&self) -> &ApiHost {
        &self.api_host
    }

    /// Returns whether the sandbox environment was requested.
    #[must_use]
    pub const fn is_sandbox(&self) -> bool {
        self.sandbox
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify AdsConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdsConfig>();
};

/// Builder for constructing [`AdsConfig`] instances.
///
/// Required fields are `consumer_key` and `consumer_secret`.
///
/// # Defaults
///
/// - `api_host`: `https://ads-api.twitter.com`, or the sandbox host when
///   `sandbox(true)` is set and no host is given explicitly
/// - `sandbox`: `false`
/// - `timeout`: 30 seconds
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct AdsConfigBuilder {
    consumer_key: Option<ConsumerKey>,
    consumer_secret: Option<ConsumerSecret>,
    api_host: Option<ApiHost>,
    sandbox: Option<bool>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl AdsConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the consumer key (required).
    #[must_use]
    pub fn consumer_key(mut self, key: ConsumerKey) -> Self {
        self.consumer_key = Some(key);
        self
    }

    /// Sets the consumer secret (required).
    #[must_use]
    pub fn consumer_secret(mut self, secret: ConsumerSecret) -> Self {
        self.consumer_secret = Some(secret);
        self
    }

    /// Sets an explicit API host. Takes precedence over [`sandbox`](Self::sandbox).
    #[must_use]
    pub fn api_host(mut self, host: ApiHost) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Targets the sandbox environment.
    #[must_use]
    pub const fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = Some(sandbox);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`AdsConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `consumer_key` or
    /// `consumer_secret` are not set.
    pub fn build(self) -> Result<AdsConfig, ConfigError> {
        let consumer_key = self.consumer_key.ok_or(ConfigError::MissingRequiredField {
            field: "consumer_key",
        })?;
        let consumer_secret = self
            .consumer_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_secret",
            })?;

        let sandbox = self.sandbox.unwrap_or(false);
        let api_host = match self.api_host {
            Some(host) => host,
            None if sandbox => ApiHost::new(ApiHost::SANDBOX)?,
            None => ApiHost::new(ApiHost::PRODUCTION)?,
        };

        Ok(AdsConfig {
            consumer_key,
            consumer_secret,
            api_host,
            sandbox,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder_with_credentials() -> AdsConfigBuilder {
        AdsConfig::builder()
            .consumer_key(ConsumerKey::new("key").unwrap())
            .consumer_secret(ConsumerSecret::new("secret").unwrap())
    }

    #[test]
    fn test_builder_requires_consumer_key() {
        let result = AdsConfigBuilder::new()
            .consumer_secret(ConsumerSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "consumer_key"
            })
        ));
    }

    #[test]
    fn test_builder_requires_consumer_secret() {
        let result = AdsConfigBuilder::new()
            .consumer_key(ConsumerKey::new("key").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "consumer_secret"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = builder_with_credentials().build().unwrap();

        assert_eq!(config.api_host().as_ref(), ApiHost::PRODUCTION);
        assert!(!config.is_sandbox());
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_sandbox_selects_sandbox_host() {
        let config = builder_with_credentials().sandbox(true).build().unwrap();

        assert!(config.is_sandbox());
        assert_eq!(config.api_host().as_ref(), ApiHost::SANDBOX);
    }

    #[test]
    fn test_explicit_host_wins_over_sandbox() {
        let config = builder_with_credentials()
            .sandbox(true)
            .api_host(ApiHost::new("http://localhost:9000").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_host().as_ref(), "http://localhost:9000");
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = builder_with_credentials()
            .timeout(Duration::from_secs(5))
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_debug_masks_secret() {
        let config = builder_with_credentials().build().unwrap();
        let debug_str = format!("{config:?}");

        assert!(debug_str.contains("AdsConfig"));
        assert!(debug_str.contains("ConsumerSecret(*****)"));
    }
}
