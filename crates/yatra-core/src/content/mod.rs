//! Compiled-in trip content: itinerary steps, route phases and packing lists.

mod packing;
mod route;
mod steps;

pub use packing::PACKING_LISTS;
pub use route::{
    DEFAULT_ROUTE_START, PHASE_KM, ROUTE_ID, ROUTE_PHASES, TOTAL_KM, WAYPOINTS,
};
pub use steps::{DAY_TITLES, STEPS};

use crate::models::{BilingualText, PackingList, StepDefinition};

pub fn step_by_slug(slug: &str) -> Option<&'static StepDefinition> {
    STEPS.iter().find(|step| step.slug == slug)
}

pub fn packing_list(key: &str) -> Option<&'static PackingList> {
    PACKING_LISTS.iter().find(|list| list.key == key)
}

pub fn day_title(day_number: u32) -> Option<BilingualText> {
    DAY_TITLES.get(day_number as usize).copied()
}
