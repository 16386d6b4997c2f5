//! HTTP clients for the external services.
//!
//! All four collaborators speak plain HTTP/JSON over TLS. Each gets a thin
//! client wrapping a shared `reqwest::Client` configuration; failures map
//! onto the application layer's `ServiceError` taxonomy.

mod geolocator;
mod icons;
mod ip_echo;
mod visit_store;

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use spotter_application::ports::ServiceError;

pub use geolocator::IpinfoGeolocator;
pub use icons::HttpIconFetcher;
pub use ip_echo::IpifyEchoClient;
pub use visit_store::RestVisitStore;

const USER_AGENT: &str = "spotter/0.1.0";

/// Per-request timeout. No call is retried, so a hung request only ever
/// costs this long.
const TIMEOUT_MS: u64 = 15_000;

/// Builds the shared client configuration.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub(crate) fn build_client() -> Result<Client, ServiceError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_millis(TIMEOUT_MS))
        .build()
        .map_err(|e| ServiceError::Other(e.to_string()))
}

/// Maps reqwest errors onto the port error taxonomy.
pub(crate) fn map_error(error: reqwest::Error) -> ServiceError {
    if error.is_timeout() {
        return ServiceError::Timeout {
            timeout_ms: TIMEOUT_MS,
        };
    }
    if let Some(status) = error.status() {
        return ServiceError::Status {
            status: status.as_u16(),
        };
    }
    if error.is_connect() {
        return ServiceError::ConnectionFailed(error.to_string());
    }
    if error.is_decode() {
        return ServiceError::MalformedResponse(error.to_string());
    }
    ServiceError::Other(error.to_string())
}

/// Sends a request and decodes the JSON body into `T`.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ServiceError> {
    let response = request.send().await.map_err(map_error)?;
    let response = response.error_for_status().map_err(map_error)?;
    response.json::<T>().await.map_err(map_error)
}
