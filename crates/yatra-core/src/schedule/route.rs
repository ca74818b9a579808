//! Route cascade: one continuous schedule across all drive phases.

use std::collections::BTreeMap;

use jiff::Timestamp;

use super::{clock::TripClock, format_minutes_to_time, format_time_window};
use crate::models::AdjustedTime;

/// Display times for every phase of the route.
///
/// Planned starts are `default_start` plus the running sum of durations. The
/// cascade starts from `custom_start` when the family edited it, and every
/// completed phase re-anchors the following one at its actual completion
/// time. Phases with `is_range` (missing entries read as `false`) show a
/// start–end window instead of an instant.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use yatra_core::schedule::{compute_adjusted_route_times, TripClock};
///
/// let times = compute_adjusted_route_times(
///     &[30, 180],
///     510,
///     &BTreeMap::new(),
///     None,
///     &[false, true],
///     &TripClock::default(),
/// );
/// assert_eq!(times[0].time, "8:30 AM");
/// assert_eq!(times[1].time, "9:00 AM – 12:00 PM");
/// assert!(!times[1].shifted);
/// ```
pub fn compute_adjusted_route_times(
    durations: &[i32],
    default_start: i32,
    completed_at: &BTreeMap<usize, Timestamp>,
    custom_start: Option<i32>,
    is_range: &[bool],
    clock: &TripClock,
) -> Vec<AdjustedTime> {
    let mut planned_start = default_start;
    let mut current = custom_start.unwrap_or(default_start);

    durations
        .iter()
        .enumerate()
        .map(|(index, &duration)| {
            let delta = current - planned_start;
            let time = if is_range.get(index).copied().unwrap_or(false) {
                format_time_window(current, current + duration)
            } else {
                format_minutes_to_time(current)
            };
            let adjusted = AdjustedTime::new(time, delta.abs() >= 1, delta);

            current = match completed_at.get(&index) {
                Some(at) => clock.minutes_of_day(at),
                None => current + duration,
            };
            planned_start += duration;
            adjusted
        })
        .collect()
}
