//! OAuth 1.0a request signing.
//!
//! Implements the HMAC-SHA1 signature scheme: a signature base string is
//! built from the method, the normalized URL and the sorted, percent-encoded
//! parameters, then signed with `consumer_secret&token_secret`. The result
//! is sent in an `Authorization: OAuth ...` header.
//!
//! Only query parameters are signed. JSON bodies are not part of an OAuth
//! 1.0a signature.
//!
//! # Example
//!
//! ```rust
//! use twitter_ads::auth::oauth1::{percent_encode, signature_base_string};
//! use twitter_ads::HttpMethod;
//!
//! let params = vec![("count".to_string(), "2".to_string())];
//! let base = signature_base_string(HttpMethod::Get, "https://ads-api.twitter.com/0/accounts", &params);
//!
//! assert_eq!(base, "GET&https%3A%2F%2Fads-api.twitter.com%2F0%2Faccounts&count%3D2");
//! assert_eq!(percent_encode("a b+c"), "a%20b%2Bc");
//! ```

use base64::Engine;
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha1::Sha1;

use crate::auth::{Authorizer, Credentials};
use crate::clients::{HttpMethod, HttpRequest};
use crate::config::{AccessToken, AccessTokenSecret, AdsConfig, ConsumerKey, ConsumerSecret};

type HmacSha1 = Hmac<Sha1>;

/// The signature method advertised in the `Authorization` header.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// The OAuth protocol version.
pub const OAUTH_VERSION: &str = "1.0";

/// Length of generated nonces.
const NONCE_LENGTH: usize = 32;

/// Signs requests with OAuth 1.0a HMAC-SHA1.
#[derive(Clone, Debug)]
pub struct OAuth1Authorizer {
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
    token: AccessToken,
    token_secret: AccessTokenSecret,
}

impl OAuth1Authorizer {
    /// Creates an authorizer from the application config and user credentials.
    #[must_use]
    pub fn new(config: &AdsConfig, credentials: &Credentials) -> Self {
        Self {
            consumer_key: config.consumer_key().clone(),
            consumer_secret: config.consumer_secret().clone(),
            token: credentials.access_token.clone(),
            token_secret: credentials.access_token_secret.clone(),
        }
    }

    /// Signs the request with an explicit nonce and timestamp.
    ///
    /// [`authorize`](Authorizer::authorize) calls this with a random nonce
    /// and the current time. Exposed so signatures can be reproduced.
    #[must_use]
    pub fn sign_with(&self, mut request: HttpRequest, nonce: &str, timestamp: i64) -> HttpRequest {
        let mut oauth_params: Vec<(String, String)> = vec![
            (
                "oauth_consumer_key".to_string(),
                self.consumer_key.as_ref().to_string(),
            ),
            ("oauth_nonce".to_string(), nonce.to_string()),
            (
                "oauth_signature_method".to_string(),
                SIGNATURE_METHOD.to_string(),
            ),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
            ("oauth_token".to_string(), self.token.as_ref().to_string()),
            ("oauth_version".to_string(), OAUTH_VERSION.to_string()),
        ];

        let mut signed_params: Vec<(String, String)> = request
            .query
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        signed_params.extend(oauth_params.iter().cloned());

        let base = signature_base_string(request.http_method, &request.url, &signed_params);
        let key = format!(
            "{}&{}",
            percent_encode(self.consumer_secret.as_ref()),
            percent_encode(self.token_secret.as_ref())
        );
        let signature = compute_signature_base64(&base, &key);

        oauth_params.push(("oauth_signature".to_string(), signature));
        oauth_params.sort();

        let header = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");

        request.set_header("Authorization", format!("OAuth {header}"));
        request
    }
}

impl Authorizer for OAuth1Authorizer {
    fn authorize(&self, request: HttpRequest) -> HttpRequest {
        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(NONCE_LENGTH)
            .map(char::from)
            .collect();
        let timestamp = chrono::Utc::now().timestamp();

        self.sign_with(request, &nonce, timestamp)
    }
}

/// Percent-encodes a value per RFC 3986.
///
/// Every byte except `A-Z a-z 0-9 - . _ ~` is encoded.
#[must_use]
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Builds the OAuth 1.0a signature base string.
///
/// `url` must not carry a query string; parameters are passed separately.
#[must_use]
pub fn signature_base_string(method: HttpMethod, url: &str, params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.as_str(),
        percent_encode(&normalize_url(url)),
        percent_encode(&param_string)
    )
}

/// Lower-cases scheme and host and drops any query or fragment.
fn normalize_url(url: &str) -> String {
    let url = url.split(['?', '#']).next().unwrap_or(url);
    match url.find("://") {
        Some(scheme_end) => {
            let authority_start = scheme_end + 3;
            let path_start = url[authority_start..]
                .find('/')
                .map_or(url.len(), |i| authority_start + i);
            format!(
                "{}{}",
                url[..path_start].to_ascii_lowercase(),
                &url[path_start..]
            )
        }
        None => url.to_string(),
    }
}

/// Computes an HMAC-SHA1 signature, returning base64-encoded output.
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature_base64(message: &str, key: &str) -> String {
    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Worked example from Twitter's "Creating a signature" documentation.
    const CONSUMER_KEY: &str = "xvz1evFS4wEEPTGEFPHBog";
    const CONSUMER_SECRET: &str = "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw";
    const TOKEN: &str = "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb";
    const TOKEN_SECRET: &str = "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE";
    const NONCE: &str = "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg";
    const TIMESTAMP: i64 = 1_318_622_958;

    fn documented_params() -> Vec<(String, String)> {
        [
            ("status", "Hello Ladies + Gentlemen, a signed OAuth request!"),
            ("include_entities", "true"),
            ("oauth_consumer_key", CONSUMER_KEY),
            ("oauth_nonce", NONCE),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", "1318622958"),
            ("oauth_token", TOKEN),
            ("oauth_version", "1.0"),
        ]
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
    }

    fn authorizer() -> OAuth1Authorizer {
        let config = AdsConfig::builder()
            .consumer_key(ConsumerKey::new(CONSUMER_KEY).unwrap())
            .consumer_secret(ConsumerSecret::new(CONSUMER_SECRET).unwrap())
            .build()
            .unwrap();
        let credentials = Credentials::new(
            AccessToken::new(TOKEN).unwrap(),
            AccessTokenSecret::new(TOKEN_SECRET).unwrap(),
        );
        OAuth1Authorizer::new(&config, &credentials)
    }

    #[test]
    fn test_signature_base_string_matches_documented_example() {
        let base = signature_base_string(
            HttpMethod::Post,
            "https://api.twitter.com/1.1/statuses/update.json",
            &documented_params(),
        );

        assert_eq!(
            base,
            "POST&https%3A%2F%2Fapi.twitter.com%2F1.1%2Fstatuses%2Fupdate.json&\
             include_entities%3Dtrue%26oauth_consumer_key%3Dxvz1evFS4wEEPTGEFPHBog%26\
             oauth_nonce%3DkYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg%26\
             oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1318622958%26\
             oauth_token%3D370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb%26\
             oauth_version%3D1.0%26status%3DHello%2520Ladies%2520%252B%2520\
             Gentlemen%252C%2520a%2520signed%2520OAuth%2520request%2521"
        );
    }

    #[test]
    fn test_signature_matches_documented_example() {
        let base = signature_base_string(
            HttpMethod::Post,
            "https://api.twitter.com/1.1/statuses/update.json",
            &documented_params(),
        );
        let key = format!("{CONSUMER_SECRET}&{TOKEN_SECRET}");

        assert_eq!(
            compute_signature_base64(&base, &key),
            "hCtSmYh+iHYCEqBWrE7C7hYmtUk="
        );
    }

    #[test]
    fn test_normalize_url_lowercases_authority_only() {
        assert_eq!(
            normalize_url("HTTPS://Ads-API.Twitter.com/0/Accounts?x=1"),
            "https://ads-api.twitter.com/0/Accounts"
        );
    }

    #[test]
    fn test_sign_with_sets_authorization_header() {
        let request = HttpRequest::builder(HttpMethod::Get, "https://ads-api.twitter.com/0/accounts")
            .query_param("count", "2")
            .build()
            .unwrap();

        let signed = authorizer().sign_with(request, NONCE, TIMESTAMP);
        let header = signed.header("Authorization").unwrap();

        assert!(header.starts_with("OAuth "));
        assert!(header.contains(r#"oauth_consumer_key="xvz1evFS4wEEPTGEFPHBog""#));
        assert!(header.contains(r#"oauth_nonce="kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg""#));
        assert!(header.contains(r#"oauth_signature_method="HMAC-SHA1""#));
        assert!(header.contains(r#"oauth_timestamp="1318622958""#));
        assert!(header.contains(r#"oauth_version="1.0""#));
        assert!(header.contains("oauth_signature=\""));
        // query parameters are signed but not echoed in the header
        assert!(!header.contains("count"));
    }

    #[test]
    fn test_sign_with_is_deterministic_and_parameter_sensitive() {
        let build = |count: &str| {
            HttpRequest::builder(HttpMethod::Get, "https://ads-api.twitter.com/0/accounts")
                .query_param("count", count)
                .build()
                .unwrap()
        };
        let auth = authorizer();

        let first = auth.sign_with(build("2"), NONCE, TIMESTAMP);
        let again = auth.sign_with(build("2"), NONCE, TIMESTAMP);
        let other = auth.sign_with(build("3"), NONCE, TIMESTAMP);

        assert_eq!(first.header("Authorization"), again.header("Authorization"));
        assert_ne!(first.header("Authorization"), other.header("Authorization"));
    }

    #[test]
    fn test_authorize_uses_fresh_nonces() {
        let build = || {
            HttpRequest::builder(HttpMethod::Get, "https://ads-api.twitter.com/0/accounts")
                .build()
                .unwrap()
        };
        let auth = authorizer();

        let a = auth.authorize(build());
        let b = auth.authorize(build());

        assert_ne!(a.header("Authorization"), b.header("Authorization"));
    }
}
