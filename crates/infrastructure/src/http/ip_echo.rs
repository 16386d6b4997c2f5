//! IP-echo client.

use async_trait::async_trait;
use reqwest::Client;
use spotter_application::ports::{IpEchoService, ServiceError};
use spotter_domain::OwnIp;

use super::{build_client, send_json};

/// Client for an ipify-style echo endpoint answering `{ "ip": string }`.
pub struct IpifyEchoClient {
    client: Client,
    endpoint: String,
}

impl IpifyEchoClient {
    /// Creates a client for the given echo endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ServiceError> {
        Ok(Self {
            client: build_client()?,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl IpEchoService for IpifyEchoClient {
    async fn my_ip(&self) -> Result<OwnIp, ServiceError> {
        send_json(
            self.client
                .get(&self.endpoint)
                .query(&[("format", "json")]),
        )
        .await
    }
}
