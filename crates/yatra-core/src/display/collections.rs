//! Wrapper types for displaying the itinerary, the route and packing lists.

use std::fmt;

use super::models::fmt_step;
use crate::{
    content,
    models::{Itinerary, Language, PackingList, PackingState, RouteOverview, RoutePhase},
};

/// The whole itinerary grouped by day with live times.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use jiff::Timestamp;
/// use yatra_core::{
///     content,
///     display::ItineraryView,
///     models::{Itinerary, StepRecord, StepStatus, StepView},
/// };
///
/// let now = Timestamp::now();
/// let steps = content::STEPS[..2]
///     .iter()
///     .map(|definition| StepView {
///         definition,
///         record: StepRecord {
///             slug: definition.slug.to_string(),
///             day_number: definition.day_number,
///             sort_order: definition.sort_order,
///             status: StepStatus::Upcoming,
///             skip_reason: None,
///             completed_at: None,
///             completed_by: None,
///             created_at: now,
///             updated_at: now,
///         },
///     })
///     .collect();
/// let itinerary = Itinerary { steps, times: HashMap::new(), current_slug: None };
///
/// let output = ItineraryView::new(&itinerary).to_string();
/// assert!(output.contains("## Day 0 · Arrival Day"));
/// assert!(output.contains("Hotel Check-in"));
/// ```
pub struct ItineraryView<'a> {
    itinerary: &'a Itinerary,
    language: Language,
}

impl<'a> ItineraryView<'a> {
    pub fn new(itinerary: &'a Itinerary) -> Self {
        Self {
            itinerary,
            language: Language::En,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

impl fmt::Display for ItineraryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.itinerary.steps.is_empty() {
            return writeln!(f, "No steps in the itinerary.");
        }

        writeln!(
            f,
            "# Itinerary ({}/{} finished)",
            self.itinerary.finished_count(),
            self.itinerary.steps.len()
        )?;
        writeln!(f)?;

        let mut current_day = None;
        for view in &self.itinerary.steps {
            let day = view.definition.day_number;
            if current_day != Some(day) {
                current_day = Some(day);
                match content::day_title(day) {
                    Some(title) => writeln!(f, "## Day {day} · {}", title.get(self.language))?,
                    None => writeln!(f, "## Day {day}")?,
                }
                writeln!(f)?;
            }
            fmt_step(
                f,
                view,
                self.itinerary.time_for(view.definition.slug),
                self.language,
            )?;
        }

        Ok(())
    }
}

/// The drive as a checklist of phases with cascaded times.
pub struct RouteTimeline<'a>(pub &'a RouteOverview);

impl fmt::Display for RouteTimeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let overview = self.0;
        writeln!(
            f,
            "# Route · {}/{} km ({}%)",
            overview.progress_km,
            overview.total_km,
            overview.percent_complete()
        )?;
        writeln!(f)?;
        writeln!(f, "- **Now**: {}", overview.segment)?;
        writeln!(f, "- **Remaining**: {} km", overview.remaining_km())?;
        if let Some(start) = overview.progress.start_time {
            writeln!(
                f,
                "- **Start**: {} (edited)",
                crate::schedule::format_minutes_to_time(start)
            )?;
        }
        writeln!(f)?;

        for (index, (definition, time)) in content::ROUTE_PHASES
            .iter()
            .zip(&overview.times)
            .enumerate()
        {
            let mark = if overview.progress.is_completed(index) {
                "x"
            } else {
                " "
            };
            write!(f, "{index}. [{mark}] **{time}** · {}", definition.phase)?;
            if let RoutePhase::Stop { critical: true, .. } = definition.phase {
                write!(f, " ⚠ do not skip")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Packing lists with their checkbox state.
pub struct PackingLists<'a> {
    pub lists: &'a [PackingList],
    pub state: &'a PackingState,
}

impl<'a> PackingLists<'a> {
    /// Every compiled-in list.
    pub fn all(state: &'a PackingState) -> Self {
        Self {
            lists: content::PACKING_LISTS,
            state,
        }
    }
}

impl fmt::Display for PackingLists<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lists.is_empty() {
            return writeln!(f, "No packing lists.");
        }

        for list in self.lists {
            writeln!(
                f,
                "## {} · {} ({}/{})",
                list.label,
                list.sub,
                self.state.checked_count(list.key),
                list.items.len()
            )?;
            writeln!(f)?;
            for (index, item) in list.items.iter().enumerate() {
                let mark = if self.state.is_checked(list.key, index as u32) {
                    "x"
                } else {
                    " "
                };
                writeln!(f, "- [{mark}] {index}. {item}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
