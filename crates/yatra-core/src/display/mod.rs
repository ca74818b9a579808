//! Markdown formatting for trip state.
//!
//! Domain models implement [`std::fmt::Display`] directly; collections and
//! operation outcomes are wrapped in newtypes that add context such as the
//! display language or the trip clock.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (StepView, ...) │───▶│ (ItineraryView) │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: itinerary, route timeline and packing lists
//! - [`results`]: confirmations for advanced steps, resets, packed items and
//!   GPS fixes
//! - [`datetime`]: timestamps in the trip's time zone
//!
//! ```rust
//! use yatra_core::display::ResetResult;
//!
//! let reset = ResetResult { count: 13 };
//! assert!(reset.to_string().starts_with("Reset 13 steps."));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

#[cfg(test)]
mod tests;

pub use collections::{ItineraryView, PackingLists, RouteTimeline};
pub use datetime::TripTime;
pub use results::{AdvanceResult, LocateResult, PackResult, ResetResult, TripFinished};
