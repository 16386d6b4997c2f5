//! Own-IP lookup use case.

use std::sync::Arc;

use spotter_domain::OwnIpReport;
use tracing::warn;

use crate::ports::IpEchoService;

/// Use case behind the "show my ip" button.
///
/// One round trip against the echo service; any failure becomes the fixed
/// fallback report. Never retried.
pub struct FetchOwnIp<S> {
    service: Arc<S>,
}

impl<S: IpEchoService> FetchOwnIp<S> {
    /// Creates the use case over an echo service port.
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }

    /// Performs the lookup and reports the display outcome.
    pub async fn execute(&self) -> OwnIpReport {
        match self.service.my_ip().await {
            Ok(own_ip) => OwnIpReport::Resolved(own_ip),
            Err(error) => {
                warn!(%error, "own-ip lookup failed");
                OwnIpReport::Failed
            }
        }
    }
}
