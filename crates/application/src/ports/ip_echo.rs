//! IP-echo service port.

use async_trait::async_trait;
use spotter_domain::OwnIp;

use super::ServiceError;

/// Port for the public IP-echo service.
#[async_trait]
pub trait IpEchoService: Send + Sync {
    /// Asks the service which address this caller appears as.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] on transport, status, or decode failure.
    async fn my_ip(&self) -> Result<OwnIp, ServiceError>;
}
