//! Schedule-cascade engine.
//!
//! Everything here is pure: callers pass the static definitions together with
//! the current completion state and get freshly derived display times back.
//! Nothing is cached between calls.
//!
//! - [`clock`]: time-window parsing/formatting and [`TripClock`]
//! - [`plan`]: itinerary cascade, reset at every day boundary
//! - [`route`]: route cascade, continuous for the whole drive

pub mod clock;
pub mod plan;
pub mod route;


pub use clock::{
    format_minutes_to_time, format_time_window, parse_time, parse_time_to_minutes,
    parse_time_window, TimeWindow, TripClock, DEFAULT_UTC_OFFSET_MINUTES, MINUTES_PER_DAY,
};
pub use plan::compute_adjusted_plan_times;
pub use route::compute_adjusted_route_times;
