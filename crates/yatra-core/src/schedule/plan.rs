//! Itinerary cascade: live display times for every step, reset per day.

use std::collections::HashMap;

use super::{clock::TripClock, format_time_window, parse_time_window};
use crate::models::{AdjustedTime, StepCompletion, StepDefinition, StepStatus};

/// Recomputes display times for all steps from their planned windows and the
/// completions recorded so far.
///
/// Steps are walked in `(day_number, sort_order)` order. Within a day a step
/// never starts before the previous step ended (actually, for finished
/// steps, or as projected). Finishing early never pulls a later step ahead of
/// its planned start.
///
/// ```rust
/// use std::collections::HashMap;
/// use yatra_core::{content, schedule::{compute_adjusted_plan_times, TripClock}};
///
/// let times = compute_adjusted_plan_times(content::STEPS, &HashMap::new(), &TripClock::default());
/// assert!(times.values().all(|t| !t.shifted && t.delta == 0));
/// ```
pub fn compute_adjusted_plan_times(
    steps: &[StepDefinition],
    completions: &HashMap<String, StepCompletion>,
    clock: &TripClock,
) -> HashMap<String, AdjustedTime> {
    let mut ordered: Vec<&StepDefinition> = steps.iter().collect();
    ordered.sort_by_key(|step| (step.day_number, step.sort_order));

    let mut result = HashMap::with_capacity(ordered.len());
    let mut current_day = None;
    let mut next_available = 0;

    for step in ordered {
        if current_day != Some(step.day_number) {
            current_day = Some(step.day_number);
            next_available = 0;
        }

        let orig_start = parse_time_window(step.time_window).start;
        let adjusted_start = orig_start.max(next_available);
        let delta = adjusted_start - orig_start;
        let completion = completions.get(step.slug).copied().unwrap_or_default();

        let adjusted = match (completion.status, completion.completed_at) {
            (StepStatus::Done, Some(completed_at)) => {
                let actual_end = clock.minutes_of_day(&completed_at);
                let planned_end = orig_start + step.duration_min;
                next_available = actual_end;
                AdjustedTime::new(
                    format_time_window(adjusted_start, actual_end),
                    delta != 0 || (actual_end - planned_end).abs() > 1,
                    delta,
                )
            }
            (StepStatus::Skipped, _) => {
                next_available = adjusted_start;
                AdjustedTime::new(step.time_window, delta != 0, delta)
            }
            _ => {
                next_available = adjusted_start + step.duration_min;
                let time = if delta != 0 {
                    format_time_window(adjusted_start, adjusted_start + step.duration_min)
                } else {
                    step.time_window.to_string()
                };
                AdjustedTime::new(time, delta != 0, delta)
            }
        };

        result.insert(step.slug.to_string(), adjusted);
    }

    result
}
