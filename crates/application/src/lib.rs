//! Spotter Application - Use cases and ports
//!
//! This crate holds the behavior of the visitor info panel: one use case
//! per user action, each talking to external collaborators through port
//! traits implemented by the infrastructure layer.

pub mod ports;
pub mod use_cases;

pub use ports::{
    CancellationReceiver, CancellationToken, Clock, GeolocationProvider, IconFetcher,
    IpEchoService, ServiceError, VisitStore,
};
pub use use_cases::{
    ClockDisplay, FetchOwnIp, GeolocateIp, ListVisits, ListVisitsError, LoadIcons,
};
