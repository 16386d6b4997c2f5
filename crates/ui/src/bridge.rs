//! UI Bridge Module
//!
//! Defines the communication protocol between the Slint UI thread and the
//! async Tokio runtime. Commands flow UI → runtime, updates flow back, and
//! each update targets exactly one display region.

/// Commands sent from UI to the async runtime.
#[derive(Debug, Clone)]
pub enum UiCommand {
    /// User clicked the "show my ip" button.
    FetchOwnIp,

    /// User clicked the "convert ip address" button with the input text.
    Geolocate {
        /// Free-text IP literal, forwarded verbatim.
        input: String,
    },

    /// User clicked the "call worker" button.
    RefreshVisits,
}

/// Updates sent from the async runtime to the UI.
#[derive(Debug, Clone)]
pub enum UiUpdate {
    /// New clock label text, once per second.
    Clock(String),

    /// Own-IP label text (address line or fixed fallback).
    OwnIp(String),

    /// Geolocation headline plus the detail block (possibly empty).
    Geolocation {
        /// Line under the convert button.
        headline: String,
        /// Four-line city/region/country/timezone block, or empty.
        detail: String,
    },

    /// Replacement rows for the visits list plus placeholder state.
    Visits {
        /// Rows in scan order, or the fixed failure row.
        entries: Vec<String>,
        /// Whether the "additional worker URLs" placeholder shows.
        placeholder_visible: bool,
    },

    /// Per-icon labels for the cosmetic strip, in configured order.
    Icons(Vec<String>),
}
