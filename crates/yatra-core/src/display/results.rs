//! Wrapper types for displaying the outcome of state changes.

use std::fmt;

use super::TripTime;
use crate::{
    models::{StepStatus, StepView},
    progress::{RoutePosition, MAX_OFF_ROUTE_KM},
    schedule::TripClock,
};

/// Confirms an advanced step.
pub struct AdvanceResult<'a> {
    pub view: &'a StepView,
    pub clock: &'a TripClock,
}

impl fmt::Display for AdvanceResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = &self.view.record;
        let title = self.view.definition.title;
        match (record.status, &record.completed_at) {
            (StepStatus::Done, Some(at)) => writeln!(
                f,
                "Marked **{title}** done at {}.",
                TripTime::new(at, self.clock)
            ),
            (StepStatus::Skipped, _) => match &record.skip_reason {
                Some(reason) => writeln!(f, "Skipped **{title}**: {reason}."),
                None => writeln!(f, "Skipped **{title}**."),
            },
            (status, _) => writeln!(f, "**{title}** is {status}."),
        }
    }
}

/// Shown when advancing finds no active or upcoming step.
pub struct TripFinished;

impl fmt::Display for TripFinished {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Every step is already finished. Nothing left to advance.")
    }
}

/// Confirms an admin reset.
pub struct ResetResult {
    pub count: usize,
}

impl fmt::Display for ResetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Reset {} steps. The first step is active again.",
            self.count
        )
    }
}

/// Where a GPS fix landed on the route, if anywhere.
pub struct LocateResult<'a> {
    pub lat: f64,
    pub lon: f64,
    pub position: Option<&'a RoutePosition>,
}

impl fmt::Display for LocateResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => writeln!(f, "You are at {position}."),
            None => writeln!(
                f,
                "{:.4},{:.4} is too far from the route to place (more than {MAX_OFF_ROUTE_KM:.0} km off the road).",
                self.lat, self.lon
            ),
        }
    }
}

/// Confirms a packing checkbox change.
pub struct PackResult<'a> {
    pub item: &'a str,
    pub checked: bool,
}

impl fmt::Display for PackResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.checked {
            writeln!(f, "Packed: {}", self.item)
        } else {
            writeln!(f, "Unpacked: {}", self.item)
        }
    }
}
