// File: crates/chart-fetch/src/transport.rs
// Summary: Transport seam for dataset requests, with the reqwest-backed HTTP implementation.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::error::FetchError;

/// Sends one dataset request and returns the raw response body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// `POST <url>` with `Content-Type: application/json` and no body.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self { Self::default() }

    /// Use a preconfigured client (proxies, default headers, TLS roots).
    pub fn with_client(client: reqwest::Client) -> Self { Self { client } }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!(url, "POST");
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_owned(), status: status.as_u16() });
        }

        let body = response.bytes().await.map_err(|e| FetchError::transport(url, e))?;
        debug!(url, bytes = body.len(), "response received");
        Ok(body.to_vec())
    }
}
