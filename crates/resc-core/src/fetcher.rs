use crate::{Error, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};

/// Default request timeout for remote retrievals.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for retrieving remote resources.
///
/// A thin wrapper over a configured [`reqwest::Client`]. Each retrieval is a
/// single GET: no retries, no backoff, no conditional requests. The cache
/// layer above never revalidates an entry, so there is nothing to condition
/// on.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a new fetcher with the default request timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a new fetcher with a custom request timeout (primarily for tests).
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("resc/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .build()
            .map_err(Error::Network)?;
        Ok(Self { client })
    }

    /// Fetches a URL, returning the raw response body.
    ///
    /// A 404 maps to [`Error::NotFound`]; any other non-success status maps
    /// to [`Error::Network`]. The body is returned as bytes regardless of
    /// content type; text decoding is the caller's concern.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            if status == StatusCode::NOT_FOUND {
                return Err(Error::NotFound(format!("Resource not found at '{url}'")));
            }

            match response.error_for_status() {
                Ok(_) => unreachable!("Status should be an error"),
                Err(err) => return Err(Error::Network(err)),
            }
        }

        let body = response.bytes().await?;
        info!("Fetched {} bytes from {}", body.len(), url);

        Ok(body.to_vec())
    }
}

// Note: Default is not implemented as Fetcher::new() can fail.
// Use Fetcher::new() directly and handle the Result.
