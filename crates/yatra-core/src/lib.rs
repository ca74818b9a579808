//! Core library for Yatra, a family road-trip itinerary coordinator.
//!
//! The crate holds the compiled-in trip (itinerary steps, route phases and
//! packing lists), the shared state the family updates as they go, and the
//! schedule cascade that turns planned times plus actual completions into
//! live display times.
//!
//! # Layout
//!
//! - [`content`]: the authored trip
//! - [`schedule`]: time parsing and the itinerary and route cascades
//! - [`progress`]: current step, distance covered and GPS position
//! - [`trip`]: the [`Trip`] facade over the SQLite store
//! - [`sync`]: client stores with optimistic and debounced writes
//! - [`weather`]: cached forecast passthrough
//! - [`display`]: markdown rendering for the terminal and MCP
//!
//! Cascades are pure functions recomputed on every read; only completion
//! records are stored.
//!
//! # Quick Start
//!
//! ```rust
//! use yatra_core::{params::AdvanceStep, Caller, TripBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let trip = TripBuilder::new()
//!     .with_database_path(Some("trip.db"))
//!     .build()
//!     .await?;
//! let caller = Caller::viewer("shruti");
//!
//! let params = AdvanceStep {
//!     slug: "check-in".to_string(),
//!     status: "done".to_string(),
//!     skip_reason: None,
//! };
//! trip.advance_step(&caller, &params).await?;
//!
//! let itinerary = trip.itinerary(&caller).await?;
//! for view in &itinerary.steps {
//!     let time = itinerary.time_for(view.definition.slug);
//!     println!("{} {:?}", view.definition.title, time);
//! }
//! # Ok(())
//! # }
//! ```

pub mod access;
pub mod content;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod progress;
pub mod schedule;
pub mod sync;
pub mod trip;
pub mod weather;

// Re-export commonly used types
pub use access::{Caller, Role};
pub use db::Database;
pub use display::{ItineraryView, PackingLists, RouteTimeline};
pub use error::{Result, TripError};
pub use models::{
    AdjustedTime, CurrentStep, Itinerary, RouteOverview, RouteProgress, StepStatus, StepView,
};
pub use trip::{Trip, TripBuilder};
pub use weather::WeatherClient;
