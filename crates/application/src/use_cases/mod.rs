//! Use cases, one per panel action.

mod clock_display;
mod fetch_own_ip;
mod geolocate_ip;
mod list_visits;
mod load_icons;

pub use clock_display::ClockDisplay;
pub use fetch_own_ip::FetchOwnIp;
pub use geolocate_ip::GeolocateIp;
pub use list_visits::{ListVisits, ListVisitsError};
pub use load_icons::LoadIcons;
