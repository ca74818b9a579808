//! Step operations for the Trip.

use std::collections::HashMap;

use jiff::Timestamp;
use log::{debug, info, warn};
use tokio::task;

use super::Trip;
use crate::{
    access::Caller,
    db::Database,
    error::{Result, TripError},
    models::{CurrentStep, Itinerary, StepCompletion, StepRecord, StepStatus, StepView},
    params::AdvanceStep,
    progress, schedule,
};

impl Trip {
    /// Loads every record, seeding the table on first use.
    async fn load_step_records(&self) -> Result<Vec<StepRecord>> {
        let db_path = self.db_path.clone();
        let steps = self.steps;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            if db.ensure_seeded(steps)? {
                info!("Seeded {} itinerary steps", steps.len());
            }
            db.list_steps()
        })
        .await
        .map_err(TripError::join)?
    }

    /// Joins records with their definitions, dropping records whose step no
    /// longer exists in the itinerary.
    fn join_views(&self, records: Vec<StepRecord>) -> Vec<StepView> {
        records
            .into_iter()
            .filter_map(|record| match self.definition(&record.slug) {
                Some(definition) => Some(StepView { definition, record }),
                None => {
                    warn!("Ignoring stored step '{}' with no definition", record.slug);
                    None
                }
            })
            .collect()
    }

    /// Lists every step in itinerary order.
    pub async fn list_steps(&self, caller: &Caller) -> Result<Vec<StepView>> {
        caller.require_user()?;
        let records = self.load_step_records().await?;
        Ok(self.join_views(records))
    }

    /// The step the family is on and the one after it.
    ///
    /// The current step is the first `active` one, falling back to the first
    /// `upcoming` one; the next step is the first `upcoming` step after it.
    pub async fn current_step(&self, caller: &Caller) -> Result<CurrentStep> {
        let views = self.list_steps(caller).await?;

        let current = views
            .iter()
            .position(|v| v.record.status == StepStatus::Active)
            .or_else(|| {
                views
                    .iter()
                    .position(|v| v.record.status == StepStatus::Upcoming)
            });

        let Some(index) = current else {
            return Ok(CurrentStep {
                step: None,
                next_step: None,
                done: true,
            });
        };

        let next_step = views[index + 1..]
            .iter()
            .find(|v| v.record.status == StepStatus::Upcoming)
            .cloned();

        Ok(CurrentStep {
            step: Some(views[index].clone()),
            next_step,
            done: false,
        })
    }

    /// Marks a step done or skipped and promotes the next upcoming step.
    ///
    /// # Errors
    ///
    /// * `TripError::Unauthorized` - Caller is not signed in
    /// * `TripError::InvalidInput` - Status is not 'done' or 'skipped'
    /// * `TripError::StepNotFound` - No step has the given slug
    pub async fn advance_step(&self, caller: &Caller, params: &AdvanceStep) -> Result<StepView> {
        let user = caller.require_user()?.to_string();
        let (outcome, skip_reason) = params.validate()?;
        let slug = params.slug.trim().to_string();
        let definition = self
            .definition(&slug)
            .ok_or_else(|| TripError::StepNotFound { slug: slug.clone() })?;

        let db_path = self.db_path.clone();
        let steps = self.steps;
        let record = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.ensure_seeded(steps)?;
            db.finish_step(
                &slug,
                outcome,
                skip_reason.as_deref(),
                &user,
                Timestamp::now(),
            )
        })
        .await
        .map_err(TripError::join)??;

        debug!(
            "Step '{}' marked {} by {}",
            record.slug,
            record.status.as_str(),
            record.completed_by.as_deref().unwrap_or("unknown")
        );
        Ok(StepView { definition, record })
    }

    /// Deletes all step state and seeds it again. Admin only.
    pub async fn reset_steps(&self, caller: &Caller) -> Result<usize> {
        let user = caller.require_admin("reset the trip")?.to_string();

        let db_path = self.db_path.clone();
        let steps = self.steps;
        let count = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.reset_steps(steps)
        })
        .await
        .map_err(TripError::join)??;

        info!("Trip reset by {user}: {count} steps re-seeded");
        Ok(count)
    }

    /// Every step with its live display time.
    pub async fn itinerary(&self, caller: &Caller) -> Result<Itinerary> {
        caller.require_user()?;
        let records = self.load_step_records().await?;

        let completions: HashMap<String, StepCompletion> = records
            .iter()
            .map(|record| (record.slug.clone(), StepCompletion::from(record)))
            .collect();
        let times = schedule::compute_adjusted_plan_times(self.steps, &completions, &self.clock);
        let current_slug = self
            .steps
            .get(progress::current_step_index(self.steps, &records))
            .map(|step| step.slug);

        Ok(Itinerary {
            steps: self.join_views(records),
            times,
            current_slug,
        })
    }
}
