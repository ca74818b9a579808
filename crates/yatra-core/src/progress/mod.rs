//! Progress derivation: where the family is in the itinerary and on the road.
//!
//! Like the cascade, everything here is recomputed from current state on
//! every read. [`tracker`] adds a background task that turns a stream of GPS
//! fixes into route positions.

pub mod geo;
pub mod tracker;


use std::collections::BTreeMap;

pub use geo::{
    haversine_km, project_onto_route, route_segment_label, RoutePosition, MAX_OFF_ROUTE_KM,
};
pub use tracker::{GeoFix, PositionTracker};

use crate::models::{StepDefinition, StepRecord, StepStatus};

/// Index into `definitions` of the step the family is on.
///
/// The first `active` record wins, then the first `upcoming` one. Returns
/// `definitions.len()` when every step is finished, and 0 when the chosen
/// record's slug has no definition.
pub fn current_step_index(definitions: &[StepDefinition], records: &[StepRecord]) -> usize {
    let current = records
        .iter()
        .find(|r| r.status == StepStatus::Active)
        .or_else(|| records.iter().find(|r| r.status == StepStatus::Upcoming));

    match current {
        Some(record) => definitions
            .iter()
            .position(|d| d.slug == record.slug)
            .unwrap_or(0),
        None => definitions.len(),
    }
}

/// Furthest kilometre mark confirmed by a completed phase.
///
/// This is a high-water mark, not the mark of the last completed index:
/// phases are not listed in strictly increasing distance.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use yatra_core::progress::progress_km;
///
/// let table = [0, 200, 200, 360, 360, 360, 552, 462, 552];
/// let completed = BTreeMap::from([(1, true), (6, true), (7, true)]);
/// assert_eq!(progress_km(&completed, &table), 552);
/// ```
pub fn progress_km(completed: &BTreeMap<usize, bool>, phase_km: &[u32]) -> u32 {
    completed
        .iter()
        .filter(|(_, done)| **done)
        .filter_map(|(index, _)| phase_km.get(*index).copied())
        .max()
        .unwrap_or(0)
}
