//! Derived read models assembled from stored state and static content.

use std::collections::HashMap;

use serde::Serialize;

use super::{AdjustedTime, RouteProgress, StepView};
use crate::{content, progress, schedule::TripClock};

/// The whole itinerary with live display times.
#[derive(Debug, Clone, Serialize)]
pub struct Itinerary {
    pub steps: Vec<StepView>,
    /// Adjusted time per slug
    pub times: HashMap<String, AdjustedTime>,
    /// Slug of the step the family is on, `None` once everything is finished
    pub current_slug: Option<&'static str>,
}

impl Itinerary {
    pub fn time_for(&self, slug: &str) -> Option<&AdjustedTime> {
        self.times.get(slug)
    }

    pub fn current(&self) -> Option<&StepView> {
        let slug = self.current_slug?;
        self.steps.iter().find(|view| view.definition.slug == slug)
    }

    /// Finished steps over all steps.
    pub fn finished_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|view| view.record.status.is_finished())
            .count()
    }
}

/// What to do now and what comes next.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentStep {
    pub step: Option<StepView>,
    pub next_step: Option<StepView>,
    /// Every step is done or skipped
    pub done: bool,
}

/// Route progress together with everything derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct RouteOverview {
    pub progress: RouteProgress,
    /// Adjusted time per phase, in phase order
    pub times: Vec<AdjustedTime>,
    pub progress_km: u32,
    pub total_km: u32,
    /// Stretch currently being driven, e.g. "SLM → MDU"
    pub segment: String,
    pub all_done: bool,
}

impl RouteOverview {
    /// Derives the overview for the trip's route.
    pub fn from_progress(progress: RouteProgress, clock: &TripClock) -> Self {
        let times = progress.adjusted_times(
            content::ROUTE_PHASES,
            content::DEFAULT_ROUTE_START,
            clock,
        );
        let progress_km = progress.progress_km(content::PHASE_KM);
        let all_done = progress.completed_count() >= content::ROUTE_PHASES.len();
        let segment =
            progress::route_segment_label(f64::from(progress_km), content::WAYPOINTS, all_done);

        Self {
            progress,
            times,
            progress_km,
            total_km: content::TOTAL_KM,
            segment,
            all_done,
        }
    }

    pub fn remaining_km(&self) -> u32 {
        self.total_km.saturating_sub(self.progress_km)
    }

    /// Whole-number percentage of the distance covered.
    pub fn percent_complete(&self) -> u32 {
        if self.total_km == 0 {
            return 0;
        }
        (f64::from(self.progress_km) / f64::from(self.total_km) * 100.0).round() as u32
    }
}
