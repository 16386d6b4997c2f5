//! Clock display use case.

use std::sync::Arc;

use crate::ports::Clock;

/// Display format for the clock label.
const CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats the current local time for the clock label.
///
/// Driven once per second by the runtime; involves no network.
pub struct ClockDisplay<C> {
    clock: Arc<C>,
}

impl<C: Clock> ClockDisplay<C> {
    /// Creates the use case over a clock port.
    pub fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    /// The current instant rendered as `YYYY-MM-DD HH:MM:SS`.
    #[must_use]
    pub fn current(&self) -> String {
        self.clock.now().format(CLOCK_FORMAT).to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{DateTime, Local, TimeZone};
    use pretty_assertions::assert_eq;

    use super::*;

    struct FixedClock(DateTime<Local>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            self.0
        }
    }

    #[test]
    fn formats_fixed_instant() {
        let instant = Local.with_ymd_and_hms(2026, 8, 7, 14, 30, 5).unwrap();
        let display = ClockDisplay::new(Arc::new(FixedClock(instant)));
        assert_eq!(display.current(), "2026-08-07 14:30:05");
    }

    #[test]
    fn pads_single_digit_components() {
        let instant = Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let display = ClockDisplay::new(Arc::new(FixedClock(instant)));
        assert_eq!(display.current(), "2026-01-02 03:04:05");
    }
}
