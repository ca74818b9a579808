//! Client-side state stores.
//!
//! Each store keeps a local copy of shared state, applies changes to it
//! immediately and then persists them:
//!
//! - [`PackingTracker`] and [`StepTracker`] write through [`Optimistic`],
//!   reverting the local change when the write fails.
//! - [`RouteTracker`] writes through [`Debounced`], so rapid toggles of route
//!   phases and edits of the start time coalesce into one write of the latest
//!   document.
//!
//! Backends are traits so the stores can run against a [`TripSession`] or
//! any other transport. No store retries a failed write; the next user
//! action is the retry.

use std::future::Future;

mod debounced;
mod optimistic;
mod trackers;


pub use debounced::{Debounced, DEFAULT_DEBOUNCE};
pub use optimistic::Optimistic;
pub use trackers::{PackingTracker, RouteTracker, StepTracker};

use crate::{
    access::Caller,
    content,
    error::Result,
    models::{PackingState, RouteProgress, StepRecord},
    params::{AdvanceStep, PackItem, PutRouteProgress, RouteId},
    trip::Trip,
};

/// Writes a whole document.
pub trait Persist<T>: Send + Sync + 'static {
    fn persist(&self, value: T) -> impl Future<Output = Result<()>> + Send;
}

/// Reads and writes packing checkboxes.
pub trait PackingBackend: Send + Sync {
    fn load_packing(&self) -> impl Future<Output = Result<PackingState>> + Send;

    fn save_packing_item(&self, item: PackItem) -> impl Future<Output = Result<()>> + Send;
}

/// Reads step records and finishes steps.
pub trait StepBackend: Send + Sync {
    fn load_steps(&self) -> impl Future<Output = Result<Vec<StepRecord>>> + Send;

    /// Finishes a step, returning the stored record.
    fn save_step(&self, params: AdvanceStep) -> impl Future<Output = Result<StepRecord>> + Send;
}

/// Reads and writes the route-progress document.
pub trait RouteBackend: Persist<RouteProgress> {
    fn load_route(&self) -> impl Future<Output = Result<RouteProgress>> + Send;
}

/// A [`Trip`] bound to the caller acting through the stores.
#[derive(Debug, Clone)]
pub struct TripSession {
    trip: Trip,
    caller: Caller,
}

impl TripSession {
    pub fn new(trip: Trip, caller: Caller) -> Self {
        Self { trip, caller }
    }

    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    pub fn caller(&self) -> &Caller {
        &self.caller
    }
}

impl PackingBackend for TripSession {
    fn load_packing(&self) -> impl Future<Output = Result<PackingState>> + Send {
        self.trip.get_packing(&self.caller)
    }

    fn save_packing_item(&self, item: PackItem) -> impl Future<Output = Result<()>> + Send {
        async move { self.trip.put_packing_item(&self.caller, &item).await }
    }
}

impl StepBackend for TripSession {
    fn load_steps(&self) -> impl Future<Output = Result<Vec<StepRecord>>> + Send {
        async move {
            let views = self.trip.list_steps(&self.caller).await?;
            Ok(views.into_iter().map(|view| view.record).collect())
        }
    }

    fn save_step(&self, params: AdvanceStep) -> impl Future<Output = Result<StepRecord>> + Send {
        async move {
            let view = self.trip.advance_step(&self.caller, &params).await?;
            Ok(view.record)
        }
    }
}

impl Persist<RouteProgress> for TripSession {
    fn persist(&self, progress: RouteProgress) -> impl Future<Output = Result<()>> + Send {
        async move {
            let params = PutRouteProgress {
                id: content::ROUTE_ID.to_string(),
                progress,
            };
            self.trip.put_route_progress(&self.caller, &params).await?;
            Ok(())
        }
    }
}

impl RouteBackend for TripSession {
    fn load_route(&self) -> impl Future<Output = Result<RouteProgress>> + Send {
        async move {
            self.trip
                .get_route_progress(&self.caller, &RouteId::default())
                .await
        }
    }
}
