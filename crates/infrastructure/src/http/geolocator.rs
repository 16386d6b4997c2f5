//! Geolocation provider client.

use async_trait::async_trait;
use reqwest::Client;
use spotter_application::ports::{GeolocationProvider, ServiceError};
use spotter_domain::GeoRecord;

use super::{build_client, send_json};

/// Client for an ipinfo-style provider serving `GET {base}/{ip}/json`.
///
/// The IP literal is taken from user input and forwarded verbatim; the
/// provider is responsible for rejecting garbage.
pub struct IpinfoGeolocator {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl IpinfoGeolocator {
    /// Creates a client for the given provider base URL and optional
    /// access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
    ) -> Result<Self, ServiceError> {
        let base_url = base_url.into();
        Ok(Self {
            client: build_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }
}

#[async_trait]
impl GeolocationProvider for IpinfoGeolocator {
    async fn locate(&self, ip: &str) -> Result<GeoRecord, ServiceError> {
        let url = format!("{}/{}/json", self.base_url, ip);
        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.query(&[("token", token)]);
        }
        send_json(request).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let client = IpinfoGeolocator::new("https://ipinfo.io/", None).unwrap();
        assert_eq!(client.base_url, "https://ipinfo.io");
    }

    #[test]
    fn provider_payload_decodes_with_partial_fields() {
        let record: GeoRecord =
            serde_json::from_str(r#"{"loc":"37.386,-122.084","city":"Mountain View"}"#).unwrap();
        assert_eq!(record.loc.as_deref(), Some("37.386,-122.084"));
        assert_eq!(record.city.as_deref(), Some("Mountain View"));
        assert_eq!(record.region, None);
    }
}
