//! Recorded-visits listing use case.

use std::sync::Arc;

use spotter_domain::VisitRecord;
use thiserror::Error;

use crate::ports::{ServiceError, VisitStore};

/// Key pattern recorded visits are stored under.
const VISIT_KEY_PATTERN: &str = "ip:*";

/// Cursor the scan starts from; the store returns it again on the final page.
const INITIAL_CURSOR: &str = "0";

/// Error type for the listing use case.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListVisitsError {
    /// The key scan failed; no values were fetched.
    #[error("key scan failed: {0}")]
    Scan(#[source] ServiceError),

    /// A value fetch failed; remaining fetches were aborted.
    #[error("value fetch for {key} failed: {source}")]
    FetchValue {
        /// The key whose fetch failed.
        key: String,
        /// The underlying call failure.
        #[source]
        source: ServiceError,
    },

    /// A scanned key held no value by the time it was fetched.
    #[error("value for {0} disappeared between scan and fetch")]
    MissingValue(String),
}

/// Use case behind the "call worker" button.
///
/// Two-step fan-out: a cursor-paginated key scan (followed until the store
/// reports cursor `"0"`), then one value fetch per key. The first fetch
/// failure aborts the rest and names the offending key; the caller maps the
/// error to the fixed failure row.
pub struct ListVisits<S> {
    store: Arc<S>,
}

impl<S: VisitStore> ListVisits<S> {
    /// Creates the use case over a visit store port.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Scans for visit keys and fetches every value, in scan order.
    ///
    /// # Errors
    ///
    /// Returns [`ListVisitsError`] when the scan or any value fetch fails.
    pub async fn execute(&self) -> Result<Vec<VisitRecord>, ListVisitsError> {
        let mut keys = Vec::new();
        let mut cursor = INITIAL_CURSOR.to_string();
        loop {
            let page = self
                .store
                .scan(&cursor, VISIT_KEY_PATTERN)
                .await
                .map_err(ListVisitsError::Scan)?;
            let done = page.is_last();
            keys.extend(page.keys);
            if done {
                break;
            }
            cursor = page.cursor;
        }

        let mut records = Vec::with_capacity(keys.len());
        for key in keys {
            let value = self
                .store
                .fetch_value(&key)
                .await
                .map_err(|source| ListVisitsError::FetchValue {
                    key: key.clone(),
                    source,
                })?;
            let Some(value) = value else {
                return Err(ListVisitsError::MissingValue(key));
            };
            records.push(VisitRecord { key, value });
        }
        Ok(records)
    }
}
