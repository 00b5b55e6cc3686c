//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated application consumer key.
///
/// # Example
///
/// ```rust
/// use twitter_ads::ConsumerKey;
///
/// let key = ConsumerKey::new("xvz1evFS4wEEPTGEFPHBog").unwrap();
/// assert_eq!(key.as_ref(), "xvz1evFS4wEEPTGEFPHBog");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumerKey(String);

impl ConsumerKey {
    /// Creates a new validated consumer key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyConsumerKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ConsumerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated application consumer secret.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ConsumerSecret(*****)` instead of the actual secret.
///
/// ```rust
/// use twitter_ads::ConsumerSecret;
///
/// let secret = ConsumerSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ConsumerSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ConsumerSecret(String);

impl ConsumerSecret {
    /// Creates a new validated consumer secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(ConfigError::EmptyConsumerSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ConsumerSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ConsumerSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConsumerSecret(*****)")
    }
}

/// A validated user access token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated user access token secret with masked debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessTokenSecret(String);

impl AccessTokenSecret {
    /// Creates a new validated access token secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessTokenSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(ConfigError::EmptyAccessTokenSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for AccessTokenSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessTokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessTokenSecret(*****)")
    }
}

/// A validated API host URL.
///
/// The URL must carry a scheme and a host. A trailing slash is stripped so
/// that resource paths (which always start with `/`) can be appended directly.
///
/// # Example
///
/// ```rust
/// use twitter_ads::ApiHost;
///
/// let host = ApiHost::new("https://ads-api.twitter.com/").unwrap();
/// assert_eq!(host.as_ref(), "https://ads-api.twitter.com");
/// assert_eq!(host.scheme(), "https");
/// assert_eq!(host.host_name(), "ads-api.twitter.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiHost {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiHost {
    /// Production Ads API host.
    pub const PRODUCTION: &'static str = "https://ads-api.twitter.com";

    /// Sandbox Ads API host.
    pub const SANDBOX: &'static str = "https://ads-api-sandbox.twitter.com";

    /// Creates a new validated API host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiHost`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidApiHost { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidApiHost { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidApiHost { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidApiHost { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for ApiHost {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ApiHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumer_key_rejects_empty_string() {
        assert!(matches!(
            ConsumerKey::new(""),
            Err(ConfigError::EmptyConsumerKey)
        ));
        assert!(matches!(
            ConsumerKey::new("   "),
            Err(ConfigError::EmptyConsumerKey)
        ));
    }

    #[test]
    fn test_secrets_are_masked_in_debug() {
        let consumer = ConsumerSecret::new("super-secret").unwrap();
        let token = AccessTokenSecret::new("token-secret").unwrap();

        assert_eq!(format!("{consumer:?}"), "ConsumerSecret(*****)");
        assert_eq!(format!("{token:?}"), "AccessTokenSecret(*****)");
        assert!(!format!("{consumer:?}").contains("super-secret"));
    }

    #[test]
    fn test_access_token_types_reject_empty() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            AccessTokenSecret::new(""),
            Err(ConfigError::EmptyAccessTokenSecret)
        ));
    }

    #[test]
    fn test_api_host_validates_format() {
        let host = ApiHost::new("https://ads-api.twitter.com").unwrap();
        assert_eq!(host.scheme(), "https");
        assert_eq!(host.host_name(), "ads-api.twitter.com");

        let host = ApiHost::new("http://localhost:8080").unwrap();
        assert_eq!(host.scheme(), "http");
        assert_eq!(host.host_name(), "localhost");
        assert_eq!(host.as_ref(), "http://localhost:8080");
    }

    #[test]
    fn test_api_host_strips_trailing_slash() {
        let host = ApiHost::new("https://ads-api.twitter.com/").unwrap();
        assert_eq!(host.as_ref(), "https://ads-api.twitter.com");
    }

    #[test]
    fn test_api_host_rejects_invalid() {
        assert!(ApiHost::new("ads-api.twitter.com").is_err());
        assert!(ApiHost::new("https://").is_err());
        assert!(ApiHost::new("://example.com").is_err());
    }
}
