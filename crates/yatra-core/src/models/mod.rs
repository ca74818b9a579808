//! Data models for itinerary steps, route progress and packing lists.
//!
//! Static, compiled-in definitions ([`StepDefinition`],
//! [`RoutePhaseDefinition`], [`PackingList`]) live next to the persisted
//! state they describe ([`StepRecord`], [`RouteProgress`], [`PackingState`]).
//! Display implementations are in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use yatra_core::models::{RouteProgress, StepStatus};
//! use jiff::Timestamp;
//!
//! let mut progress = RouteProgress::default();
//! assert!(progress.toggle(2, Timestamp::now()));
//! assert!(progress.is_completed(2));
//! assert!(progress.completed_at.contains_key(&2));
//!
//! assert_eq!("skipped".parse::<StepStatus>(), Ok(StepStatus::Skipped));
//! ```

pub mod adjusted;
pub mod overview;
pub mod packing;
pub mod route;
pub mod status;
pub mod step;
pub mod text;

#[cfg(test)]
mod tests;

pub use adjusted::AdjustedTime;
pub use overview::{CurrentStep, Itinerary, RouteOverview};
pub use packing::{PackingList, PackingState};
pub use route::{RoutePhase, RoutePhaseDefinition, RouteProgress, Waypoint};
pub use status::{StepOutcome, StepStatus};
pub use step::{StepCompletion, StepDefinition, StepRecord, StepView};
pub use text::{BilingualText, Language};
