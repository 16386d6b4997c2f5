//! Visit store port.

use async_trait::async_trait;
use spotter_domain::ScanPage;

use super::ServiceError;

/// Port for the key/value store holding recorded visits.
#[async_trait]
pub trait VisitStore: Send + Sync {
    /// Returns one page of keys matching `pattern`, starting at `cursor`.
    ///
    /// A returned cursor of `"0"` marks the final page.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] on transport, status, or decode failure.
    async fn scan(&self, cursor: &str, pattern: &str) -> Result<ScanPage, ServiceError>;

    /// Fetches the value stored under `key`.
    ///
    /// Returns `None` when the key no longer holds a value (e.g. it expired
    /// between the scan and this fetch).
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] on transport, status, or decode failure.
    async fn fetch_value(&self, key: &str) -> Result<Option<String>, ServiceError>;
}
