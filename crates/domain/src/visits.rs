//! Recorded-visit types.
//!
//! The logging service stores one key per recorded visitor. Listing is a
//! two-step fan-out: a cursor-paginated key scan, then one value fetch per
//! key. Records are kept in scan order; nothing is persisted locally.

use serde::{Deserialize, Serialize};

/// Cursor value marking the final page of a scan.
const SCAN_DONE: &str = "0";

/// One page of a key scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanPage {
    /// Cursor for the next page; `"0"` means the scan is complete.
    pub cursor: String,
    /// Keys matched on this page, in store order.
    pub keys: Vec<String>,
}

impl ScanPage {
    /// Returns true when no further pages remain.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.cursor == SCAN_DONE
    }
}

/// One recorded visit: the scanned key and its stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    /// Store key, e.g. `ip:1`.
    pub key: String,
    /// Stored value, typically the visitor's address.
    pub value: String,
}

/// Outcome of a visits listing, mapped to list rows plus placeholder state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitListing {
    /// The scan matched no keys. Valid state, not an error.
    Empty,

    /// At least one record was fetched, in scan order.
    Records(Vec<VisitRecord>),

    /// The scan or one of the value fetches failed.
    Failed,
}

impl VisitListing {
    /// Builds a listing from fetched records, collapsing none into `Empty`.
    #[must_use]
    pub fn from_records(records: Vec<VisitRecord>) -> Self {
        if records.is_empty() {
            Self::Empty
        } else {
            Self::Records(records)
        }
    }

    /// Rows shown in the visits list.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        match self {
            Self::Empty => Vec::new(),
            Self::Records(records) => records.iter().map(|r| r.value.clone()).collect(),
            Self::Failed => vec!["Failed to fetch IP addresses".to_string()],
        }
    }

    /// Whether the "additional worker URLs" placeholder is visible.
    #[must_use]
    pub fn placeholder_visible(&self) -> bool {
        !matches!(self, Self::Records(_))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(key: &str, value: &str) -> VisitRecord {
        VisitRecord {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn final_page_is_detected() {
        let page = ScanPage {
            cursor: "0".to_string(),
            keys: vec![],
        };
        assert!(page.is_last());

        let page = ScanPage {
            cursor: "42".to_string(),
            keys: vec!["ip:1".to_string()],
        };
        assert!(!page.is_last());
    }

    #[test]
    fn records_keep_scan_order_and_hide_placeholder() {
        let listing = VisitListing::from_records(vec![
            record("ip:1", "1.2.3.4"),
            record("ip:2", "5.6.7.8"),
        ]);
        assert_eq!(listing.entries(), vec!["1.2.3.4", "5.6.7.8"]);
        assert!(!listing.placeholder_visible());
    }

    #[test]
    fn no_records_is_empty_with_placeholder() {
        let listing = VisitListing::from_records(vec![]);
        assert_eq!(listing, VisitListing::Empty);
        assert_eq!(listing.entries(), Vec::<String>::new());
        assert!(listing.placeholder_visible());
    }

    #[test]
    fn failed_listing_shows_fixed_row_and_placeholder() {
        let listing = VisitListing::Failed;
        assert_eq!(listing.entries(), vec!["Failed to fetch IP addresses"]);
        assert!(listing.placeholder_visible());
    }
}
