//! Icon fetcher port.

use async_trait::async_trait;

use super::ServiceError;

/// Port for fetching raw icon bytes.
///
/// The bytes are never decoded; callers only care whether the fetch
/// produced a non-empty body.
#[async_trait]
pub trait IconFetcher: Send + Sync {
    /// Fetches the body at `url`.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] on transport or status failure.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ServiceError>;
}
