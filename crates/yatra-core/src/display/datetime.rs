//! Timestamp display in the trip's time zone.

use std::fmt;

use jiff::Timestamp;

use crate::schedule::{format_minutes_to_time, TripClock};

/// Formats a timestamp as a 12-hour clock time in the trip's time zone, the
/// same way planned times are written.
///
/// ```rust
/// use jiff::Timestamp;
/// use yatra_core::{display::TripTime, schedule::TripClock};
///
/// let ts: Timestamp = "2026-01-10T04:50:00Z".parse().unwrap();
/// assert_eq!(TripTime::new(&ts, &TripClock::default()).to_string(), "10:20 AM");
/// ```
pub struct TripTime<'a> {
    timestamp: &'a Timestamp,
    clock: &'a TripClock,
}

impl<'a> TripTime<'a> {
    pub fn new(timestamp: &'a Timestamp, clock: &'a TripClock) -> Self {
        Self { timestamp, clock }
    }
}

impl fmt::Display for TripTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            format_minutes_to_time(self.clock.minutes_of_day(self.timestamp))
        )
    }
}
