//! The HTTP transport seam.
//!
//! [`HttpTransport`] is the collaborator that performs network I/O. The SDK
//! core never talks to the network directly: every
//! [`Request::perform`](crate::rest::Request::perform) hands an authorized
//! [`HttpRequest`] to the client's transport and gets an [`HttpResponse`]
//! (or a [`TransportError`]) back.
//!
//! [`ReqwestTransport`] is the production implementation. Tests substitute a
//! fake that serves canned responses.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;

/// Performs blocking HTTP I/O on behalf of the SDK.
///
/// Implementations must not retry: each call to [`send`](Self::send) is
/// exactly one attempt. Timeouts and cancellation surface as
/// [`TransportError`].
pub trait HttpTransport: Send + Sync + fmt::Debug {
    /// Sends the request and returns the raw response.
    ///
    /// Any status code, including 4xx and 5xx, is a successful send.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no response could be obtained.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport backed by `reqwest`.
///
/// # Thread Safety
///
/// `ReqwestTransport` is `Send + Sync`. It must not be called from inside an
/// async runtime worker; use `spawn_blocking` there.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        let res = builder.send()?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text()?;

        Ok(HttpResponse::new(code, headers, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_builds_with_timeout() {
        let transport = ReqwestTransport::new(Duration::from_secs(5));
        assert!(transport.is_ok());
    }

    #[test]
    fn test_transport_is_object_safe() {
        fn accepts(_: &dyn HttpTransport) {}
        let transport = ReqwestTransport::new(Duration::from_secs(1)).unwrap();
        accepts(&transport);
    }

    #[test]
    fn test_unreachable_host_is_a_transport_error() {
        let transport = ReqwestTransport::new(Duration::from_millis(500)).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "http://127.0.0.1:9/0/accounts")
            .build()
            .unwrap();

        assert!(transport.send(&request).is_err());
    }
}
