//! Clock port for time-related operations

use chrono::{DateTime, Local};

/// Port for reading the current wall-clock time.
///
/// The panel displays local time, so the port hands out `Local` timestamps.
/// A fixed implementation makes the clock display testable.
pub trait Clock: Send + Sync {
    /// Returns the current local timestamp.
    fn now(&self) -> DateTime<Local>;
}
