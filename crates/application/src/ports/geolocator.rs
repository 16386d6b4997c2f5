//! Geolocation provider port.

use async_trait::async_trait;
use spotter_domain::GeoRecord;

use super::ServiceError;

/// Port for the IP-to-location provider.
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    /// Looks up the given IP literal.
    ///
    /// The input is forwarded verbatim; the provider decides whether it is
    /// a usable address.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] on transport, status, or decode failure.
    async fn locate(&self, ip: &str) -> Result<GeoRecord, ServiceError>;
}
