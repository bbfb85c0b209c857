// File: crates/chart-fetch/src/fetcher.rs
// Summary: Single and fan-out dataset fetches decoding JSON bodies into payload types.
// Notes:
// - All-or-nothing: a multi-endpoint fetch waits for every request, logs each
//   failure, and reports the first failure in request order.

use futures::future::join_all;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::transport::{HttpTransport, Transport};

pub struct Fetcher<T = HttpTransport> {
    transport: T,
}

impl Fetcher<HttpTransport> {
    pub fn http() -> Self { Self::new(HttpTransport::new()) }
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T) -> Self { Self { transport } }

    pub fn transport(&self) -> &T { &self.transport }

    /// POST to `url` and decode the body as `R`.
    pub async fn fetch_one<R: DeserializeOwned>(&self, url: &str) -> Result<R, FetchError> {
        let result = self.request(url).await;
        if let Err(e) = &result {
            warn!(url, error = %e, "failed to fetch dataset");
        }
        result
    }

    /// POST to every url concurrently; results keep the order of `urls`.
    pub async fn fetch_all<R: DeserializeOwned>(&self, urls: &[String]) -> Result<Vec<R>, FetchError> {
        debug!(count = urls.len(), "fetching datasets");
        let settled = join_all(urls.iter().map(|url| self.request::<R>(url))).await;

        let mut first_error = None;
        let mut out = Vec::with_capacity(settled.len());
        for result in settled {
            match result {
                Ok(value) => out.push(value),
                Err(e) => {
                    warn!(url = e.url(), error = %e, "failed to fetch dataset");
                    first_error.get_or_insert(e);
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(out),
        }
    }

    async fn request<R: DeserializeOwned>(&self, url: &str) -> Result<R, FetchError> {
        let body = self.transport.post(url).await?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { url: url.to_owned(), source })
    }
}
