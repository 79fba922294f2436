use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::{EpicError, Result, UpstreamError};

/// Network-fetch primitive shared by the token exchange and resource requests.
/// Issues each request exactly once; retries are left to the caller.
#[derive(Clone)]
pub struct HttpDispatcher {
    /// Shared HTTP client with connection pooling
    client: Client,
}

impl HttpDispatcher {
    pub fn new(connect_timeout: u64, request_timeout: u64) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(connect_timeout))
            .timeout(Duration::from_secs(request_timeout))
            .build()?;

        Ok(Self { client })
    }

    /// Get the underlying HTTP client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Execute a prepared request
    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        tracing::debug!(method = %method, url = %url, "Sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                tracing::debug!(status = %response.status(), url = %url, "Received HTTP response");
                Ok(response)
            }
            Err(e) => {
                let error_kind = if e.is_timeout() {
                    "timeout"
                } else if e.is_connect() {
                    "connection_failed"
                } else if e.is_request() {
                    "request_error"
                } else if e.is_body() {
                    "body_error"
                } else {
                    "unknown"
                };

                tracing::warn!(
                    error_kind = error_kind,
                    error = %e,
                    method = %method,
                    url = %url,
                    "HTTP request error"
                );
                Err(EpicError::Network(e))
            }
        }
    }

    /// Decode a success response as JSON
    pub async fn read_json<T: DeserializeOwned>(response: Response, url: &str) -> Result<T> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|source| {
            tracing::warn!(url = %url, error = %source, "Response body did not match expected shape");
            EpicError::Decode {
                url: url.to_string(),
                source,
            }
        })
    }

    /// Collect diagnostics from a non-success response
    pub async fn upstream_error(response: Response, url: &str) -> UpstreamError {
        let status = response.status();
        let raw_text = response.text().await.unwrap_or_default();

        tracing::error!(
            status = status.as_u16(),
            url = %url,
            response_body = %raw_text,
            "HTTP request failed with error response"
        );

        UpstreamError::new(status, url, raw_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upstream_error_from_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body(r#"{"errorCode":"errors.com.epicgames.common.not_found"}"#)
            .create_async()
            .await;

        let http = HttpDispatcher::new(5, 5).unwrap();
        let url = format!("{}/missing", server.url());
        let response = http.send(http.client().get(&url)).await.unwrap();
        let err = HttpDispatcher::upstream_error(response, &url).await;

        mock.assert_async().await;
        assert_eq!(err.status, 404);
        assert_eq!(err.url, url);
        assert_eq!(err.error_code(), Some("errors.com.epicgames.common.not_found"));
    }

    #[tokio::test]
    async fn test_read_json_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/text")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let http = HttpDispatcher::new(5, 5).unwrap();
        let url = format!("{}/text", server.url());
        let response = http.send(http.client().get(&url)).await.unwrap();
        let result: Result<serde_json::Value> = HttpDispatcher::read_json(response, &url).await;

        assert!(matches!(result, Err(EpicError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        let http = HttpDispatcher::new(1, 1).unwrap();
        // Port 9 (discard) is not listening in test environments
        let result = http.send(http.client().get("http://127.0.0.1:9/")).await;
        assert!(matches!(result, Err(EpicError::Network(_))));
    }
}
