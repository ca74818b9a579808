//! High-level trip API over the SQLite stores.
//!
//! [`Trip`] is the single entry point every surface talks to. Each operation
//! checks the [`crate::access::Caller`], validates its parameters, then opens
//! a connection on a blocking worker and runs the query there:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  CLI / MCP      │    │      Trip       │    │    Database     │
//! │  (Caller +      │───▶│ (access checks, │───▶│   (via db/)     │
//! │   params)       │    │  spawn_blocking)│    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Derived views ([`crate::models::Itinerary`],
//! [`crate::models::RouteOverview`]) are recomputed from stored state on
//! every call.
//!
//! - [`builder`]: database location and trip clock
//! - [`step_ops`]: list, current, advance, reset, itinerary
//! - [`route_ops`]: route-progress document and its overview
//! - [`packing_ops`]: packing checkboxes
//!
//! ```rust
//! use yatra_core::{access::Caller, TripBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let trip = TripBuilder::new()
//!     .with_database_path(Some("/tmp/yatra-doc.db"))
//!     .build()
//!     .await?;
//!
//! let now = trip.current_step(&Caller::viewer("ma")).await?;
//! if let Some(view) = now.step {
//!     println!("Now: {}", view.definition.title.en);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use crate::{
    models::StepDefinition,
    schedule::TripClock,
};

pub mod builder;
pub mod packing_ops;
pub mod route_ops;
pub mod step_ops;

#[cfg(test)]
mod tests;

pub use builder::TripBuilder;

/// Main trip interface.
#[derive(Debug, Clone)]
pub struct Trip {
    pub(crate) db_path: PathBuf,
    pub(crate) clock: TripClock,
    pub(crate) steps: &'static [StepDefinition],
}

impl Trip {
    pub(crate) fn new(
        db_path: PathBuf,
        clock: TripClock,
        steps: &'static [StepDefinition],
    ) -> Self {
        Self {
            db_path,
            clock,
            steps,
        }
    }

    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    pub fn clock(&self) -> &TripClock {
        &self.clock
    }

    /// The itinerary this trip seeds its step records from.
    pub fn step_definitions(&self) -> &'static [StepDefinition] {
        self.steps
    }

    pub(crate) fn definition(&self, slug: &str) -> Option<&'static StepDefinition> {
        self.steps.iter().find(|step| step.slug == slug)
    }
}
