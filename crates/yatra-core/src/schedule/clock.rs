//! Parsing and formatting of authored clock times.
//!
//! Times are minutes since local midnight. Authored strings look like
//! `"8:30 AM"`, `"~4:45 PM"`, `"1:00 – 4:00 PM"`, `"11:45 AM – 12:30 PM"` or
//! `"9:00 AM onwards"`. They are static content, so anything unparseable
//! degrades to midnight instead of failing.

use jiff::{
    tz::{Offset, TimeZone},
    Timestamp,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TripError};

pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// India Standard Time, the trip's locale.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 5 * 60 + 30;

/// Start and optional end of a planned window, in minutes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: i32,
    /// `None` for single instants and open-ended windows
    pub end: Option<i32>,
}

/// Parses `"H:MM AM|PM"` anywhere in the string, ignoring a leading `~`.
///
/// ```rust
/// use yatra_core::schedule::parse_time;
///
/// assert_eq!(parse_time("8:30 AM"), Some(510));
/// assert_eq!(parse_time("~4:45 pm"), Some(16 * 60 + 45));
/// assert_eq!(parse_time("12:05 AM"), Some(5));
/// assert_eq!(parse_time("noon"), None);
/// ```
pub fn parse_time(s: &str) -> Option<i32> {
    let cleaned = s.trim_start().trim_start_matches('~').trim();
    let bytes = cleaned.as_bytes();

    for (colon, _) in cleaned.match_indices(':') {
        let digits_before = bytes[..colon]
            .iter()
            .rev()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits_before == 0 {
            continue;
        }
        let minute_digits = match bytes.get(colon + 1..colon + 3) {
            Some(m) if m.iter().all(u8::is_ascii_digit) => m,
            _ => continue,
        };
        let period = match cleaned[colon + 3..].trim_start().get(..2) {
            Some(p) if p.eq_ignore_ascii_case("AM") => Period::Am,
            Some(p) if p.eq_ignore_ascii_case("PM") => Period::Pm,
            _ => continue,
        };

        let hour_start = colon - digits_before.min(2);
        let mut hour: i32 = cleaned[hour_start..colon].parse().ok()?;
        let minute = i32::from(minute_digits[0] - b'0') * 10 + i32::from(minute_digits[1] - b'0');

        match period {
            Period::Pm if hour != 12 => hour += 12,
            Period::Am if hour == 12 => hour = 0,
            _ => {}
        }
        return Some((hour * 60 + minute).rem_euclid(MINUTES_PER_DAY));
    }
    None
}

/// Like [`parse_time`], but unparseable input reads as midnight.
pub fn parse_time_to_minutes(s: &str) -> i32 {
    parse_time(s).unwrap_or(0)
}

/// Formats minutes as a 12-hour clock time, wrapping past midnight.
///
/// ```rust
/// use yatra_core::schedule::format_minutes_to_time;
///
/// assert_eq!(format_minutes_to_time(510), "8:30 AM");
/// assert_eq!(format_minutes_to_time(720), "12:00 PM");
/// assert_eq!(format_minutes_to_time(1445), "12:05 AM");
/// ```
pub fn format_minutes_to_time(mins: i32) -> String {
    let mins = mins.rem_euclid(MINUTES_PER_DAY);
    format!(
        "{}:{:02} {}",
        hour12(mins),
        mins % 60,
        Period::of(mins).as_str()
    )
}

/// Parses a point, range or open-ended window.
///
/// ```rust
/// use yatra_core::schedule::{parse_time_window, TimeWindow};
///
/// assert_eq!(
///     parse_time_window("1:00 – 4:00 PM"),
///     TimeWindow { start: 780, end: Some(960) }
/// );
/// assert_eq!(
///     parse_time_window("9:00 AM onwards"),
///     TimeWindow { start: 540, end: None }
/// );
/// ```
pub fn parse_time_window(s: &str) -> TimeWindow {
    if s.to_lowercase().contains("onwards") {
        return TimeWindow {
            start: parse_time_to_minutes(s),
            end: None,
        };
    }

    let parts: Vec<&str> = s
        .split(|c| c == '–' || c == '-')
        .map(str::trim)
        .collect();
    if let [start, end] = parts.as_slice() {
        let start = if find_period(start).is_some() {
            (*start).to_string()
        } else {
            format!("{start} {}", find_period(end).unwrap_or("AM"))
        };
        return TimeWindow {
            start: parse_time_to_minutes(&start),
            end: Some(parse_time_to_minutes(end)),
        };
    }

    TimeWindow {
        start: parse_time_to_minutes(s),
        end: None,
    }
}

/// Formats a window, dropping the start's period when both ends share it.
///
/// ```rust
/// use yatra_core::schedule::format_time_window;
///
/// assert_eq!(format_time_window(780, 960), "1:00 – 4:00 PM");
/// assert_eq!(format_time_window(705, 750), "11:45 AM – 12:30 PM");
/// ```
pub fn format_time_window(start: i32, end: i32) -> String {
    let start = start.rem_euclid(MINUTES_PER_DAY);
    let end = end.rem_euclid(MINUTES_PER_DAY);
    if Period::of(start) == Period::of(end) {
        format!(
            "{}:{:02} – {}",
            hour12(start),
            start % 60,
            format_minutes_to_time(end)
        )
    } else {
        format!(
            "{} – {}",
            format_minutes_to_time(start),
            format_minutes_to_time(end)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Period {
    Am,
    Pm,
}

impl Period {
    fn of(mins: i32) -> Self {
        if mins / 60 >= 12 {
            Period::Pm
        } else {
            Period::Am
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }
}

fn hour12(mins: i32) -> i32 {
    match mins / 60 {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    }
}

/// First AM/PM marker in the string, case-insensitive.
fn find_period(s: &str) -> Option<&'static str> {
    let upper = s.to_ascii_uppercase();
    match (upper.find("AM"), upper.find("PM")) {
        (Some(am), Some(pm)) if pm < am => Some("PM"),
        (Some(_), _) => Some("AM"),
        (None, Some(_)) => Some("PM"),
        (None, None) => None,
    }
}

/// Converts stored UTC timestamps to local clock minutes in the trip's
/// single fixed offset.
#[derive(Debug, Clone, PartialEq)]
pub struct TripClock {
    time_zone: TimeZone,
}

impl TripClock {
    /// Clock at a fixed offset from UTC, in minutes.
    pub fn fixed(offset_minutes: i32) -> Result<Self> {
        let offset =
            Offset::from_seconds(offset_minutes * 60).map_err(|e| TripError::Configuration {
                message: format!("Invalid UTC offset of {offset_minutes} minutes: {e}"),
            })?;
        Ok(Self {
            time_zone: TimeZone::fixed(offset),
        })
    }

    pub fn utc() -> Self {
        Self {
            time_zone: TimeZone::UTC,
        }
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// Local `hour * 60 + minute` of the timestamp.
    pub fn minutes_of_day(&self, timestamp: &Timestamp) -> i32 {
        let local = timestamp.to_zoned(self.time_zone.clone());
        i32::from(local.hour()) * 60 + i32::from(local.minute())
    }
}

impl Default for TripClock {
    fn default() -> Self {
        Self::fixed(DEFAULT_UTC_OFFSET_MINUTES).unwrap_or_else(|_| Self::utc())
    }
}
