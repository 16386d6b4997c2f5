//! Icon fetcher client.

use async_trait::async_trait;
use reqwest::Client;
use spotter_application::ports::{IconFetcher, ServiceError};

use super::{build_client, map_error};

/// Fetches raw icon bytes over HTTP. The bytes are never decoded here;
/// decoding is out of scope for the panel.
pub struct HttpIconFetcher {
    client: Client,
}

impl HttpIconFetcher {
    /// Creates the fetcher.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self, ServiceError> {
        Ok(Self {
            client: build_client()?,
        })
    }
}

#[async_trait]
impl IconFetcher for HttpIconFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ServiceError> {
        let response = self.client.get(url).send().await.map_err(map_error)?;
        let response = response.error_for_status().map_err(map_error)?;
        let bytes = response.bytes().await.map_err(map_error)?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetcher_builds() {
        assert!(HttpIconFetcher::new().is_ok());
    }
}
