//! HTTP transport capability
//!
//! The resolver only needs GET and POST; TLS, proxies and timeouts are left
//! to the implementation's defaults.

use async_trait::async_trait;
use tracing::warn;

use crate::error::{LookupError, Result};

// == HTTP Response ==
/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Shorthand for a 200 response.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, body)
    }

    /// Returns the body of a successful response.
    ///
    /// `204` and `404` are how the service says it has no such player; any
    /// other non-2xx status is a transport failure.
    pub fn into_body(self) -> Result<Vec<u8>> {
        match self.status {
            204 | 404 => Err(LookupError::PlayerNotFound),
            200..=299 => Ok(self.body),
            status => {
                warn!(status, "identity service returned an error status");
                Err(LookupError::Transport(format!(
                    "unexpected HTTP status {}",
                    status
                )))
            }
        }
    }
}

// == Transport Trait ==
/// Outbound HTTP used by the resolver.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse>;

    async fn post(&self, url: &str, content_type: &str, body: Vec<u8>) -> Result<HttpResponse>;
}

// == Reqwest Transport ==
/// Production transport over a pooled `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    async fn finish(response: reqwest::Response) -> Result<HttpResponse> {
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Transport(format!("failed to read body: {}", e)))?;
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(format!("GET {} failed: {}", url, e)))?;
        Self::finish(response).await
    }

    async fn post(&self, url: &str, content_type: &str, body: Vec<u8>) -> Result<HttpResponse> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| LookupError::Transport(format!("POST {} failed: {}", url, e)))?;
        Self::finish(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_returns_body() {
        let body = HttpResponse::ok(r#"["Notch"]"#).into_body().unwrap();
        assert_eq!(body, br#"["Notch"]"#.to_vec());
    }

    #[test]
    fn test_no_content_is_not_found() {
        let err = HttpResponse::new(204, Vec::new()).into_body().unwrap_err();
        assert!(err.is_not_found());
        let err = HttpResponse::new(404, "{}").into_body().unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_error_status_is_transport() {
        let err = HttpResponse::new(429, "{}").into_body().unwrap_err();
        assert!(matches!(err, LookupError::Transport(_)));
        let err = HttpResponse::new(503, "").into_body().unwrap_err();
        assert!(matches!(err, LookupError::Transport(_)));
    }

    #[tokio::test]
    async fn test_reqwest_transport_connection_failure() {
        // Port 9 (discard) on localhost is expected to refuse connections
        let transport = ReqwestTransport::new();
        let err = transport.get("http://127.0.0.1:9/names").await.unwrap_err();
        assert!(matches!(err, LookupError::Transport(_)));
    }
}
