//! HTTP response types for the Twitter Ads API SDK.
//!
//! This module provides the raw [`HttpResponse`] returned by a transport and
//! the [`RateLimit`] information parsed from its headers.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};

/// Rate limit information parsed from the `x-rate-limit-*` headers.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use twitter_ads::clients::HttpResponse;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-rate-limit-limit".to_string(), vec!["450".to_string()]);
/// headers.insert("x-rate-limit-remaining".to_string(), vec!["449".to_string()]);
/// headers.insert("x-rate-limit-reset".to_string(), vec!["1433160000".to_string()]);
///
/// let response = HttpResponse::new(200, headers, "{}");
/// let limit = response.rate_limit().unwrap();
/// assert_eq!(limit.limit, 450);
/// assert_eq!(limit.remaining, 449);
/// assert!(!limit.is_exhausted());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// The number of requests allowed in the current window.
    pub limit: u32,
    /// The number of requests left in the current window.
    pub remaining: u32,
    /// When the current window resets.
    pub reset: Option<DateTime<Utc>>,
}

impl RateLimit {
    /// Returns `true` when no requests remain in the current window.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// A raw HTTP response as produced by a transport.
///
/// Header names are stored lower-cased; a header may carry several values.
/// The body is kept as text and decoded by the caller.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The undecoded response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, lower-casing header names.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let mut normalized: HashMap<String, Vec<String>> = HashMap::with_capacity(headers.len());
        for (name, values) in headers {
            normalized
                .entry(name.to_ascii_lowercase())
                .or_default()
                .extend(values);
        }

        Self {
            code,
            headers: normalized,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the request identifier, if the API sent one.
    ///
    /// Reads `x-request-id`, falling back to `x-transaction-id`.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
            .or_else(|| self.header("x-transaction-id"))
    }

    /// Parses the rate limit headers.
    ///
    /// Returns `None` unless both `x-rate-limit-limit` and
    /// `x-rate-limit-remaining` are present and numeric.
    #[must_use]
    pub fn rate_limit(&self) -> Option<RateLimit> {
        let limit = self.header("x-rate-limit-limit")?.trim().parse().ok()?;
        let remaining = self.header("x-rate-limit-remaining")?.trim().parse().ok()?;
        let reset = self
            .header("x-rate-limit-reset")
            .and_then(|value| value.trim().parse::<i64>().ok())
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single());

        Some(RateLimit {
            limit,
            remaining,
            reset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in pairs {
            map.entry((*name).to_string())
                .or_default()
                .push((*value).to_string());
        }
        map
    }

    #[test]
    fn test_is_ok_for_2xx_range() {
        assert!(HttpResponse::new(200, HashMap::new(), "").is_ok());
        assert!(HttpResponse::new(204, HashMap::new(), "").is_ok());
        assert!(!HttpResponse::new(302, HashMap::new(), "").is_ok());
        assert!(!HttpResponse::new(404, HashMap::new(), "").is_ok());
    }

    #[test]
    fn test_header_names_are_normalized() {
        let response = HttpResponse::new(200, headers(&[("X-Request-Id", "abc")]), "");

        assert_eq!(response.header("x-request-id"), Some("abc"));
        assert_eq!(response.header("X-REQUEST-ID"), Some("abc"));
    }

    #[test]
    fn test_request_id_falls_back_to_transaction_id() {
        let response = HttpResponse::new(200, headers(&[("x-transaction-id", "txn-1")]), "");
        assert_eq!(response.request_id(), Some("txn-1"));

        let response = HttpResponse::new(200, HashMap::new(), "");
        assert_eq!(response.request_id(), None);
    }

    #[test]
    fn test_rate_limit_parsing() {
        let response = HttpResponse::new(
            200,
            headers(&[
                ("x-rate-limit-limit", "250"),
                ("x-rate-limit-remaining", "0"),
                ("x-rate-limit-reset", "1433160000"),
            ]),
            "",
        );

        let limit = response.rate_limit().unwrap();
        assert_eq!(limit.limit, 250);
        assert!(limit.is_exhausted());
        assert_eq!(limit.reset.map(|t| t.timestamp()), Some(1_433_160_000));
    }

    #[test]
    fn test_rate_limit_absent_or_malformed() {
        let response = HttpResponse::new(200, HashMap::new(), "");
        assert!(response.rate_limit().is_none());

        let response = HttpResponse::new(
            200,
            headers(&[("x-rate-limit-limit", "many"), ("x-rate-limit-remaining", "1")]),
            "",
        );
        assert!(response.rate_limit().is_none());
    }
}
