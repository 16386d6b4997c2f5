//! IP geolocation use case.

use std::sync::Arc;

use spotter_domain::GeoReport;
use tracing::warn;

use crate::ports::GeolocationProvider;

/// Use case behind the "convert ip address" button.
///
/// An empty input short-circuits to a prompt without touching the network.
/// Everything else is forwarded verbatim to the provider; no caching, so a
/// repeated lookup repeats the round trip.
pub struct GeolocateIp<P> {
    provider: Arc<P>,
}

impl<P: GeolocationProvider> GeolocateIp<P> {
    /// Creates the use case over a geolocation provider port.
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Geolocates the given free-text input and reports the outcome.
    pub async fn execute(&self, input: &str) -> GeoReport {
        if input.is_empty() {
            return GeoReport::Prompt;
        }

        match self.provider.locate(input).await {
            Ok(record) => record
                .into_location()
                .map_or(GeoReport::NotFound, GeoReport::Located),
            Err(error) => {
                warn!(%error, ip = input, "geolocation failed");
                GeoReport::Failed
            }
        }
    }
}
