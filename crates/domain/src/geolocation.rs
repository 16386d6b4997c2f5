//! Geolocation records and reports.
//!
//! The geolocation provider answers a JSON object whose fields are all
//! optional. `GeoRecord` models that payload with typed optional fields;
//! absence is a state, not a runtime dictionary lookup. The `loc` field,
//! when present, is a `"<lat>,<long>"` string split on the first comma.

use serde::{Deserialize, Serialize};

/// Raw geolocation response record with every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoRecord {
    /// Coordinates as `"<lat>,<long>"`, if the provider knows them.
    #[serde(default)]
    pub loc: Option<String>,

    /// City name.
    #[serde(default)]
    pub city: Option<String>,

    /// Region or state name.
    #[serde(default)]
    pub region: Option<String>,

    /// Country code or name.
    #[serde(default)]
    pub country: Option<String>,

    /// IANA timezone identifier.
    #[serde(default)]
    pub timezone: Option<String>,
}

impl GeoRecord {
    /// Derives a typed location from the record.
    ///
    /// Returns `None` when `loc` is absent, empty, has no comma, or either
    /// half does not parse as a float. Callers treat `None` as the
    /// location-not-found state.
    #[must_use]
    pub fn into_location(self) -> Option<GeoLocation> {
        let loc = self.loc.as_deref()?;
        if loc.is_empty() {
            return None;
        }
        let (lat, long) = loc.split_once(',')?;
        let latitude: f64 = lat.parse().ok()?;
        let longitude: f64 = long.parse().ok()?;
        Some(GeoLocation {
            latitude,
            longitude,
            city: self.city,
            region: self.region,
            country: self.country,
            timezone: self.timezone,
        })
    }
}

/// A resolved location for display.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// City name, if reported.
    pub city: Option<String>,
    /// Region or state, if reported.
    pub region: Option<String>,
    /// Country, if reported.
    pub country: Option<String>,
    /// Timezone, if reported.
    pub timezone: Option<String>,
}

/// Outcome of a geolocation action, mapped to a headline and a detail block.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoReport {
    /// The input was empty; no call was made.
    Prompt,

    /// The provider reported coordinates.
    Located(GeoLocation),

    /// The provider answered but without usable coordinates.
    NotFound,

    /// The call failed (transport, HTTP status, or decode).
    Failed,
}

impl GeoReport {
    /// The headline shown under the convert button.
    #[must_use]
    pub fn headline(&self) -> String {
        match self {
            Self::Prompt => "did you try calling the worker?".to_string(),
            Self::Located(location) => format!(
                "Latitude: {}, Longitude: {}",
                location.latitude, location.longitude
            ),
            Self::NotFound => "Location not found.".to_string(),
            Self::Failed => "Failed to fetch data.".to_string(),
        }
    }

    /// The four-line detail block, empty unless a location was found.
    ///
    /// Fields the provider omitted render as empty values so the block
    /// shape is stable.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Located(location) => format!(
                "City: {}\nRegion: {}\nCountry: {}\nTimezone: {}",
                location.city.as_deref().unwrap_or(""),
                location.region.as_deref().unwrap_or(""),
                location.country.as_deref().unwrap_or(""),
                location.timezone.as_deref().unwrap_or(""),
            ),
            _ => String::new(),
        }
    }
}
