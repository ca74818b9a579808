#[cfg(test)]
mod display_tests {
    use std::collections::HashMap;

    use jiff::Timestamp;

    use crate::{
        content,
        display::{
            AdvanceResult, ItineraryView, LocateResult, PackingLists, ResetResult, RouteTimeline,
            TripFinished,
        },
        models::{
            AdjustedTime, CurrentStep, Itinerary, Language, PackingState, RouteOverview,
            RouteProgress, StepRecord, StepStatus, StepView,
        },
        progress::RoutePosition,
        schedule::TripClock,
    };

    fn view(index: usize, status: StepStatus) -> StepView {
        let definition = &content::STEPS[index];
        let now = Timestamp::now();
        StepView {
            definition,
            record: StepRecord {
                slug: definition.slug.to_string(),
                day_number: definition.day_number,
                sort_order: definition.sort_order,
                status,
                skip_reason: None,
                completed_at: None,
                completed_by: None,
                created_at: now,
                updated_at: now,
            },
        }
    }

    #[test]
    fn test_adjusted_time_shows_delta() {
        assert_eq!(
            AdjustedTime::new("10:20 – 11:20 AM", true, 20).to_string(),
            "10:20 – 11:20 AM (+20 min)"
        );
        assert_eq!(AdjustedTime::new("9:00 AM", false, 0).to_string(), "9:00 AM");
    }

    #[test]
    fn test_itinerary_groups_by_day_and_shows_shift() {
        let mut times = HashMap::new();
        times.insert(
            "evening-recon".to_string(),
            AdjustedTime::new("7:15 – 8:45 PM", true, 15),
        );
        let itinerary = Itinerary {
            steps: vec![
                view(0, StepStatus::Done),
                view(1, StepStatus::Active),
                view(2, StepStatus::Upcoming),
            ],
            times,
            current_slug: Some("evening-recon"),
        };

        let output = ItineraryView::new(&itinerary).to_string();
        assert!(output.starts_with("# Itinerary (1/3 finished)"));
        assert!(output.contains("## Day 0 · Arrival Day"));
        assert!(output.contains("## Day 1 · Core Darshan Day"));
        assert!(output.contains("7:15 – 8:45 PM (+15 min) · planned 7:00 – 8:30 PM"));
        assert!(output.contains("(➤ Now)"));

        let hindi = ItineraryView::new(&itinerary)
            .with_language(Language::Hi)
            .to_string();
        assert!(hindi.contains("होटल चेक-इन"));
    }

    #[test]
    fn test_current_step_display() {
        let current = CurrentStep {
            step: Some(view(1, StepStatus::Active)),
            next_step: Some(view(2, StepStatus::Upcoming)),
            done: false,
        };
        let output = current.to_string();
        assert!(output.starts_with("# Now"));
        assert!(output.contains("**Next**:"));

        let finished = CurrentStep {
            step: None,
            next_step: None,
            done: true,
        };
        assert!(finished.to_string().starts_with("# All done"));
    }

    #[test]
    fn test_route_timeline_marks_completed_phases() {
        let mut progress = RouteProgress::default();
        progress.completed.insert(0, true);
        let overview = RouteOverview::from_progress(progress, &TripClock::default());

        let output = RouteTimeline(&overview).to_string();
        assert!(output.starts_with("# Route · 0/552 km (0%)"));
        assert!(output.contains("0. [x] **8:30 AM**"));
        assert!(output.contains("1. [ ] **9:00 AM – 12:00 PM**"));
        assert!(output.contains("do not skip"));
    }

    #[test]
    fn test_packing_lists_show_counts() {
        let mut state = PackingState::default();
        state.set("car", 0, true);

        let output = PackingLists::all(&state).to_string();
        assert!(output.contains("- [x] 0."));
        let car = content::packing_list("car").unwrap();
        assert!(output.contains(&format!("(1/{})", car.items.len())));
    }

    #[test]
    fn test_advance_result_uses_trip_time() {
        let mut done = view(0, StepStatus::Done);
        done.record.completed_at = Some("2026-01-10T13:00:00Z".parse().unwrap());
        let clock = TripClock::default();

        let output = AdvanceResult {
            view: &done,
            clock: &clock,
        }
        .to_string();
        assert_eq!(output, "Marked **Hotel Check-in** done at 6:30 PM.\n");

        let mut skipped = view(1, StepStatus::Skipped);
        skipped.record.skip_reason = Some("Too tired".to_string());
        let output = AdvanceResult {
            view: &skipped,
            clock: &clock,
        }
        .to_string();
        assert!(output.contains("Too tired"));
    }

    #[test]
    fn test_locate_result() {
        let position = RoutePosition {
            route_km: 212.4,
            off_route_km: 1.2,
        };
        let placed = LocateResult {
            lat: 10.7905,
            lon: 78.7047,
            position: Some(&position),
        };
        assert_eq!(
            placed.to_string(),
            "You are at km 212 on route, 1.2 km off the road.\n"
        );

        let far = LocateResult {
            lat: 28.6139,
            lon: 77.209,
            position: None,
        };
        assert_eq!(
            far.to_string(),
            "28.6139,77.2090 is too far from the route to place (more than 25 km off the road).\n"
        );
    }

    #[test]
    fn test_reset_and_finished_messages() {
        assert_eq!(
            ResetResult { count: 13 }.to_string(),
            "Reset 13 steps. The first step is active again.\n"
        );
        assert!(TripFinished.to_string().starts_with("Every step is already finished."));
    }
}
