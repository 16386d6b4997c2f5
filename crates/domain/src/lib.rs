//! Spotter Domain - Core business types
//!
//! This crate defines the domain model for the Spotter visitor info panel.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod geolocation;
pub mod icon;
pub mod lookup;
pub mod settings;
pub mod visits;

pub use error::{DomainError, DomainResult};
pub use geolocation::{GeoLocation, GeoRecord, GeoReport};
pub use icon::{IconSource, IconState};
pub use lookup::{OwnIp, OwnIpReport};
pub use settings::ProviderSettings;
pub use visits::{ScanPage, VisitListing, VisitRecord};
