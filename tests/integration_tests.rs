//! Integration tests for the Twitter Ads SDK.
//!
//! These tests verify end-to-end functionality of configuration, credentials
//! and client construction.

use std::time::Duration;

use twitter_ads::{
    AccessToken, AccessTokenSecret, AdsConfig, ApiHost, Client, ConfigError, ConsumerKey,
    ConsumerSecret, Credentials,
};

fn credentials() -> Credentials {
    Credentials::new(
        AccessToken::new("access-token").unwrap(),
        AccessTokenSecret::new("access-token-secret").unwrap(),
    )
}

#[test]
fn test_full_workflow_create_newtypes_build_config_build_client() {
    let config = AdsConfig::builder()
        .consumer_key(ConsumerKey::new("consumer-key").unwrap())
        .consumer_secret(ConsumerSecret::new("consumer-secret").unwrap())
        .timeout(Duration::from_secs(10))
        .user_agent_prefix("Reporting/2.1")
        .build()
        .unwrap();

    assert_eq!(config.consumer_key().as_ref(), "consumer-key");
    assert_eq!(config.api_host().as_ref(), ApiHost::PRODUCTION);
    assert_eq!(config.timeout(), Duration::from_secs(10));
    assert!(!config.is_sandbox());

    let client = Client::new(config, credentials()).unwrap();

    assert_eq!(client.base_url(), "https://ads-api.twitter.com");
    assert!(client.user_agent().starts_with("Reporting/2.1 | twitter-ads-rust v"));
    assert_eq!(client.credentials().access_token.as_ref(), "access-token");
}

#[test]
fn test_sandbox_selects_sandbox_host_unless_overridden() {
    let sandbox = AdsConfig::builder()
        .consumer_key(ConsumerKey::new("k").unwrap())
        .consumer_secret(ConsumerSecret::new("s").unwrap())
        .sandbox(true)
        .build()
        .unwrap();
    assert_eq!(sandbox.api_host().as_ref(), ApiHost::SANDBOX);

    let explicit = AdsConfig::builder()
        .consumer_key(ConsumerKey::new("k").unwrap())
        .consumer_secret(ConsumerSecret::new("s").unwrap())
        .sandbox(true)
        .api_host(ApiHost::new("http://localhost:8080/").unwrap())
        .build()
        .unwrap();
    assert_eq!(explicit.api_host().as_ref(), "http://localhost:8080");
    assert!(explicit.is_sandbox());
}

#[test]
fn test_multi_user_clients_share_one_config() {
    let config = AdsConfig::builder()
        .consumer_key(ConsumerKey::new("app-key").unwrap())
        .consumer_secret(ConsumerSecret::new("app-secret").unwrap())
        .build()
        .unwrap();

    let alice = Client::new(
        config.clone(),
        Credentials::new(
            AccessToken::new("alice-token").unwrap(),
            AccessTokenSecret::new("alice-secret").unwrap(),
        ),
    )
    .unwrap();
    let bob = Client::new(
        config,
        Credentials::new(
            AccessToken::new("bob-token").unwrap(),
            AccessTokenSecret::new("bob-secret").unwrap(),
        ),
    )
    .unwrap();

    assert_eq!(alice.credentials().access_token.as_ref(), "alice-token");
    assert_eq!(bob.credentials().access_token.as_ref(), "bob-token");
    assert_eq!(alice.config().consumer_key(), bob.config().consumer_key());
}

#[test]
fn test_error_handling_invalid_inputs_produce_correct_errors() {
    assert!(matches!(ConsumerKey::new(""), Err(ConfigError::EmptyConsumerKey)));
    assert!(matches!(
        ConsumerSecret::new(""),
        Err(ConfigError::EmptyConsumerSecret)
    ));
    assert!(matches!(AccessToken::new(""), Err(ConfigError::EmptyAccessToken)));
    assert!(matches!(
        AccessTokenSecret::new(""),
        Err(ConfigError::EmptyAccessTokenSecret)
    ));
    assert!(matches!(
        ApiHost::new("ads-api.twitter.com"),
        Err(ConfigError::InvalidApiHost { .. })
    ));

    let missing = AdsConfig::builder()
        .consumer_key(ConsumerKey::new("k").unwrap())
        .build();
    assert!(matches!(
        missing,
        Err(ConfigError::MissingRequiredField { field: "consumer_secret" })
    ));
}

#[test]
fn test_secrets_are_masked_in_debug_output() {
    let secret = ConsumerSecret::new("super-secret-value").unwrap();
    let token_secret = AccessTokenSecret::new("token-secret-value").unwrap();

    assert!(!format!("{secret:?}").contains("super-secret-value"));
    assert!(!format!("{token_secret:?}").contains("token-secret-value"));
}

#[test]
fn test_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<AdsConfig>();
    assert_send_sync::<Credentials>();
    assert_send_sync::<Client>();
}
