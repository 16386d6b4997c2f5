//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer; tests substitute mocks.

mod cancel;
mod clock;
mod error;
mod geolocator;
mod icon_fetcher;
mod ip_echo;
mod visit_store;

pub use cancel::{CancellationReceiver, CancellationToken};
pub use clock::Clock;
pub use error::ServiceError;
pub use geolocator::GeolocationProvider;
pub use icon_fetcher::IconFetcher;
pub use ip_echo::IpEchoService;
pub use visit_store::VisitStore;
