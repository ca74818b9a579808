//! Route phases, waypoints and the persisted route-progress document.

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AdjustedTime;
use crate::{
    error::{Result, TripError},
    progress,
    schedule::{self, TripClock},
};

/// Version tag written into every stored route-progress document.
pub const ROUTE_DOCUMENT_VERSION: u32 = 2;

/// One segment of the drive.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RoutePhase {
    Drive {
        from: &'static str,
        to: &'static str,
        distance_km: u32,
        highway: &'static str,
    },
    Stop {
        name: &'static str,
        note: &'static str,
        maps_url: Option<&'static str>,
        /// Stops that must not be missed, like the last refuel before a
        /// sparse stretch
        critical: bool,
    },
    Arrival {
        name: &'static str,
        note: &'static str,
        maps_url: Option<&'static str>,
    },
}

impl RoutePhase {
    /// Short one-line label used in timelines.
    pub fn label(&self) -> String {
        match self {
            RoutePhase::Drive {
                from,
                to,
                distance_km,
                highway,
            } => format!("{from} → {to} · {distance_km} km · {highway}"),
            RoutePhase::Stop { name, .. } => (*name).to_string(),
            RoutePhase::Arrival { name, .. } => format!("Arrive {name}"),
        }
    }

    pub fn maps_url(&self) -> Option<&'static str> {
        match self {
            RoutePhase::Drive { .. } => None,
            RoutePhase::Stop { maps_url, .. } | RoutePhase::Arrival { maps_url, .. } => *maps_url,
        }
    }
}

/// A route phase together with its planned duration.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RoutePhaseDefinition {
    pub phase: RoutePhase,
    pub duration_min: i32,
    /// Displayed as a start–end window rather than a single instant
    pub is_range: bool,
}

/// A named point on the route polyline.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Waypoint {
    pub name: &'static str,
    pub short: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub km: f64,
}

/// Completion state of the route, one document per route id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteProgress {
    pub completed: BTreeMap<usize, bool>,
    pub completed_at: BTreeMap<usize, Timestamp>,
    /// Edited trip start in minutes since midnight; `None` uses the default
    pub start_time: Option<i32>,
}

/// Versioned envelope the document is stored in.
#[derive(Debug, Serialize, Deserialize)]
struct StoredRouteProgress {
    #[serde(rename = "_version")]
    version: u32,
    #[serde(default)]
    phases: BTreeMap<usize, bool>,
    #[serde(default, rename = "completedAt")]
    completed_at: BTreeMap<usize, Timestamp>,
    #[serde(default, rename = "startTime")]
    start_time: Option<i32>,
}

impl RouteProgress {
    /// Reads a stored document, upgrading the older flat `index → bool` map.
    pub fn from_stored(value: Value) -> Result<Self> {
        let versioned = value.get("_version").is_some();
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(_) if versioned => {
                let stored: StoredRouteProgress = serde_json::from_value(value)?;
                Ok(Self {
                    completed: stored.phases,
                    completed_at: stored.completed_at,
                    start_time: stored.start_time,
                })
            }
            Value::Object(_) => Ok(Self {
                completed: serde_json::from_value(value)?,
                ..Self::default()
            }),
            other => Err(TripError::invalid_input("route_progress")
                .with_reason(format!("Unexpected stored document: {other}"))),
        }
    }

    /// Serializes into the current versioned envelope.
    pub fn to_stored(&self) -> Result<Value> {
        let stored = StoredRouteProgress {
            version: ROUTE_DOCUMENT_VERSION,
            phases: self.completed.clone(),
            completed_at: self.completed_at.clone(),
            start_time: self.start_time,
        };
        Ok(serde_json::to_value(stored)?)
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.get(&index).copied().unwrap_or(false)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.values().filter(|done| **done).count()
    }

    /// Flips a phase and records or clears its completion time. Returns the
    /// new completion state.
    pub fn toggle(&mut self, index: usize, now: Timestamp) -> bool {
        let done = !self.is_completed(index);
        self.completed.insert(index, done);
        if done {
            self.completed_at.insert(index, now);
        } else {
            self.completed_at.remove(&index);
        }
        done
    }

    /// Sets or clears the edited start time.
    pub fn set_start_time(&mut self, start_time: Option<i32>) -> Result<()> {
        if let Some(minutes) = start_time {
            if !(0..schedule::MINUTES_PER_DAY).contains(&minutes) {
                return Err(TripError::invalid_input("start_time")
                    .with_reason(format!("{minutes} is not a minute of the day")));
            }
        }
        self.start_time = start_time;
        Ok(())
    }

    /// Furthest confirmed kilometre mark.
    pub fn progress_km(&self, phase_km: &[u32]) -> u32 {
        progress::progress_km(&self.completed, phase_km)
    }

    /// Runs the route cascade over the given phases using this document's
    /// completion times and start override.
    pub fn adjusted_times(
        &self,
        phases: &[RoutePhaseDefinition],
        default_start: i32,
        clock: &TripClock,
    ) -> Vec<AdjustedTime> {
        let durations: Vec<i32> = phases.iter().map(|p| p.duration_min).collect();
        let is_range: Vec<bool> = phases.iter().map(|p| p.is_range).collect();
        schedule::compute_adjusted_route_times(
            &durations,
            default_start,
            &self.completed_at,
            self.start_time,
            &is_range,
            clock,
        )
    }
}
