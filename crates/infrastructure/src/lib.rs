//! Spotter Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in the
//! application layer: reqwest-based clients for the external services, the
//! system clock, and settings persistence.

pub mod adapters;
pub mod http;
pub mod persistence;

pub use adapters::SystemClock;
pub use http::{HttpIconFetcher, IpifyEchoClient, IpinfoGeolocator, RestVisitStore};
pub use persistence::{SettingsError, SettingsRepository};
