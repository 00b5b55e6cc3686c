//! Error types for the Twitter Ads API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use twitter_ads::{ConsumerKey, ConfigError};
//!
//! let result = ConsumerKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyConsumerKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Consumer key cannot be empty.
    #[error("Consumer key cannot be empty. Please provide a valid Twitter consumer key.")]
    EmptyConsumerKey,

    /// Consumer secret cannot be empty.
    #[error("Consumer secret cannot be empty. Please provide a valid Twitter consumer secret.")]
    EmptyConsumerSecret,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid user access token.")]
    EmptyAccessToken,

    /// Access token secret cannot be empty.
    #[error("Access token secret cannot be empty. Please provide a valid user access token secret.")]
    EmptyAccessTokenSecret,

    /// API host is invalid.
    #[error("Invalid API host '{url}'. Please provide a URL with scheme (e.g., 'https://ads-api.twitter.com').")]
    InvalidApiHost {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_consumer_key_error_message() {
        let error = ConfigError::EmptyConsumerKey;
        let message = error.to_string();
        assert!(message.contains("Consumer key cannot be empty"));
        assert!(message.contains("valid Twitter consumer key"));
    }

    #[test]
    fn test_invalid_api_host_error_message() {
        let error = ConfigError::InvalidApiHost {
            url: "ads-api".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ads-api"));
        assert!(message.contains("scheme"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "consumer_key",
        };
        let message = error.to_string();
        assert!(message.contains("consumer_key"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAccessToken;
        let _: &dyn std::error::Error = &error;
    }
}
