//! Stores for packing checkboxes, step status and route progress.

use jiff::Timestamp;
use log::debug;

use super::{Debounced, Optimistic, PackingBackend, RouteBackend, StepBackend};
use crate::{
    content,
    error::{Result, TripError},
    models::{PackingState, RouteOverview, RouteProgress, StepOutcome, StepRecord, StepStatus},
    params::{AdvanceStep, PackItem},
    schedule::TripClock,
};

/// Packing checkboxes with optimistic writes.
#[derive(Debug)]
pub struct PackingTracker<B> {
    state: Optimistic<PackingState>,
    backend: B,
}

impl<B: PackingBackend> PackingTracker<B> {
    pub async fn load(backend: B) -> Result<Self> {
        let state = backend.load_packing().await?;
        Ok(Self {
            state: Optimistic::new(state),
            backend,
        })
    }

    pub fn state(&self) -> &PackingState {
        self.state.get()
    }

    /// Sets one checkbox, reverting it when the write fails.
    pub async fn set(&mut self, list_key: &str, item_index: u32, checked: bool) -> Result<()> {
        let item = PackItem {
            list_key: list_key.to_string(),
            item_index,
            checked,
        };
        item.validate()?;

        let backend = &self.backend;
        self.state
            .apply(
                |state| state.set(list_key, item_index, checked),
                move || backend.save_packing_item(item),
            )
            .await
    }

    /// Flips one checkbox. Returns the new state.
    pub async fn toggle(&mut self, list_key: &str, item_index: u32) -> Result<bool> {
        let checked = !self.state().is_checked(list_key, item_index);
        self.set(list_key, item_index, checked).await?;
        Ok(checked)
    }
}

/// Step records with optimistic advance.
#[derive(Debug)]
pub struct StepTracker<B> {
    records: Optimistic<Vec<StepRecord>>,
    backend: B,
}

impl<B: StepBackend> StepTracker<B> {
    pub async fn load(backend: B) -> Result<Self> {
        let records = backend.load_steps().await?;
        Ok(Self {
            records: Optimistic::new(records),
            backend,
        })
    }

    pub fn records(&self) -> &[StepRecord] {
        self.records.get()
    }

    /// Currently active record, if any.
    pub fn active(&self) -> Option<&StepRecord> {
        self.records()
            .iter()
            .find(|record| record.status == StepStatus::Active)
    }

    /// Finishes the active step and promotes the next upcoming one locally
    /// before the write. Returns `None` when no step is active.
    pub async fn advance(
        &mut self,
        outcome: StepOutcome,
        skip_reason: Option<String>,
    ) -> Result<Option<StepRecord>> {
        let Some(slug) = self.active().map(|record| record.slug.clone()) else {
            debug!("No active step to advance");
            return Ok(None);
        };

        let params = AdvanceStep {
            slug: slug.clone(),
            status: StepStatus::from(outcome).as_str().to_string(),
            skip_reason: skip_reason.clone(),
        };
        let now = Timestamp::now();

        let backend = &self.backend;
        let stored = self
            .records
            .apply(
                |records| finish_locally(records, &slug, outcome, skip_reason, now),
                move || backend.save_step(params),
            )
            .await?;

        if let Some(record) = self
            .records
            .get_mut()
            .iter_mut()
            .find(|record| record.slug == stored.slug)
        {
            *record = stored.clone();
        }
        Ok(Some(stored))
    }
}

/// Mirrors the stored advance on local records.
fn finish_locally(
    records: &mut [StepRecord],
    slug: &str,
    outcome: StepOutcome,
    skip_reason: Option<String>,
    now: Timestamp,
) {
    if let Some(record) = records.iter_mut().find(|record| record.slug == slug) {
        record.status = outcome.into();
        match outcome {
            StepOutcome::Done => {
                record.completed_at = Some(now);
                record.skip_reason = None;
            }
            StepOutcome::Skipped => {
                record.completed_at = None;
                record.skip_reason = skip_reason;
            }
        }
        record.updated_at = now;
    }

    if let Some(next) = records
        .iter_mut()
        .find(|record| record.status == StepStatus::Upcoming)
    {
        next.status = StepStatus::Active;
        next.updated_at = now;
    }
}

/// Route progress with debounced writes.
#[derive(Debug)]
pub struct RouteTracker<B> {
    progress: Debounced<RouteProgress, B>,
    clock: TripClock,
}

impl<B: RouteBackend> RouteTracker<B> {
    pub async fn load(backend: B, clock: TripClock) -> Result<Self> {
        let progress = backend.load_route().await?;
        Ok(Self::from_parts(Debounced::new(progress, backend), clock))
    }

    pub fn from_parts(progress: Debounced<RouteProgress, B>, clock: TripClock) -> Self {
        Self { progress, clock }
    }

    pub fn progress(&self) -> RouteProgress {
        self.progress.get()
    }

    pub fn overview(&self) -> RouteOverview {
        RouteOverview::from_progress(self.progress.get(), &self.clock)
    }

    /// Flips a phase locally and schedules the write. Returns the new state.
    pub fn toggle(&self, index: usize) -> Result<bool> {
        if index >= content::ROUTE_PHASES.len() {
            return Err(TripError::invalid_input("index").with_reason(format!(
                "Route has {} phases",
                content::ROUTE_PHASES.len()
            )));
        }
        self.progress
            .update(|progress| Ok(progress.toggle(index, Timestamp::now())))
    }

    /// Sets or clears the edited start time and schedules the write.
    pub fn set_start_time(&self, start_time: Option<i32>) -> Result<()> {
        self.progress
            .update(|progress| progress.set_start_time(start_time))
    }

    pub fn last_error(&self) -> Option<String> {
        self.progress.last_error()
    }

    pub async fn flush(&self) -> Result<()> {
        self.progress.flush().await
    }
}
