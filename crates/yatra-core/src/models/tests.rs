#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;
    use serde_json::json;

    use crate::{
        content,
        error::TripError,
        models::{
            AdjustedTime, BilingualText, Language, PackingState, RouteOverview, RoutePhase,
            RouteProgress, StepOutcome, StepStatus,
        },
        schedule::TripClock,
    };

    #[test]
    fn test_step_status_round_trip() {
        for status in [
            StepStatus::Upcoming,
            StepStatus::Active,
            StepStatus::Done,
            StepStatus::Skipped,
        ] {
            assert_eq!(status.as_str().parse::<StepStatus>(), Ok(status));
        }
        assert!("finished".parse::<StepStatus>().is_err());
        assert!(StepStatus::Skipped.is_finished());
        assert!(!StepStatus::Active.is_finished());
    }

    #[test]
    fn test_step_outcome_only_accepts_finishing_states() {
        assert_eq!(" Done ".parse::<StepOutcome>().unwrap(), StepOutcome::Done);
        assert_eq!(
            StepStatus::from("skipped".parse::<StepOutcome>().unwrap()),
            StepStatus::Skipped
        );

        let err = "active".parse::<StepOutcome>().unwrap_err();
        assert!(matches!(err, TripError::InvalidInput { ref field, .. } if field == "status"));
    }

    #[test]
    fn test_bilingual_text_falls_back_to_english() {
        let text = BilingualText::new("Temple", "मंदिर");
        assert_eq!(text.get(Language::Hi), "मंदिर");
        assert_eq!(text.get(Language::En), "Temple");

        let untranslated = BilingualText::new("Fuel", "");
        assert_eq!(untranslated.get(Language::Hi), "Fuel");
        assert_eq!("hindi".parse::<Language>(), Ok(Language::Hi));
    }

    #[test]
    fn test_delta_label() {
        assert_eq!(AdjustedTime::new("x", true, 20).delta_label().as_deref(), Some("+20 min"));
        assert_eq!(AdjustedTime::new("x", true, -5).delta_label().as_deref(), Some("-5 min"));
        assert_eq!(AdjustedTime::new("x", false, 0).delta_label(), None);
    }

    #[test]
    fn test_route_progress_reads_versioned_document() {
        let stored = json!({
            "_version": 2,
            "phases": {"0": true, "3": true},
            "completedAt": {"3": "2026-01-10T07:00:00Z"},
            "startTime": 540
        });

        let progress = RouteProgress::from_stored(stored).unwrap();
        assert!(progress.is_completed(0));
        assert!(progress.is_completed(3));
        assert_eq!(
            progress.completed_at[&3],
            "2026-01-10T07:00:00Z".parse::<Timestamp>().unwrap()
        );
        assert_eq!(progress.start_time, Some(540));
    }

    #[test]
    fn test_route_progress_upgrades_flat_map() {
        let progress = RouteProgress::from_stored(json!({"1": true, "2": false})).unwrap();

        assert!(progress.is_completed(1));
        assert!(!progress.is_completed(2));
        assert_eq!(progress.completed_count(), 1);
        assert!(progress.completed_at.is_empty());
        assert_eq!(progress.start_time, None);
    }

    #[test]
    fn test_route_progress_null_and_invalid() {
        assert_eq!(
            RouteProgress::from_stored(serde_json::Value::Null).unwrap(),
            RouteProgress::default()
        );
        assert!(RouteProgress::from_stored(json!([1, 2])).is_err());
        assert!(RouteProgress::from_stored(json!({"one": true})).is_err());
    }

    #[test]
    fn test_route_progress_stored_form_is_versioned() {
        let mut progress = RouteProgress::default();
        progress.toggle(4, "2026-01-10T08:00:00Z".parse().unwrap());
        progress.set_start_time(Some(600)).unwrap();

        let stored = progress.to_stored().unwrap();
        assert_eq!(stored["_version"], 2);
        assert_eq!(stored["phases"]["4"], true);
        assert_eq!(stored["startTime"], 600);
        assert_eq!(RouteProgress::from_stored(stored).unwrap(), progress);
    }

    #[test]
    fn test_toggle_stamps_and_clears() {
        let mut progress = RouteProgress::default();
        let now = Timestamp::now();

        assert!(progress.toggle(1, now));
        assert_eq!(progress.completed_at.get(&1), Some(&now));
        assert!(!progress.toggle(1, now));
        assert!(!progress.completed_at.contains_key(&1));
        assert_eq!(progress.completed.get(&1), Some(&false));
    }

    #[test]
    fn test_set_start_time_rejects_out_of_day() {
        let mut progress = RouteProgress::default();
        assert!(progress.set_start_time(Some(1440)).is_err());
        assert!(progress.set_start_time(Some(-1)).is_err());
        assert_eq!(progress.start_time, None);

        progress.set_start_time(Some(0)).unwrap();
        assert_eq!(progress.start_time, Some(0));
        progress.set_start_time(None).unwrap();
        assert_eq!(progress.start_time, None);
    }

    #[test]
    fn test_route_overview_distance() {
        let mut progress = RouteProgress::default();
        progress.completed.insert(1, true);
        progress.completed.insert(6, true);

        let overview = RouteOverview::from_progress(progress, &TripClock::default());
        assert_eq!(overview.progress_km, 552);
        assert_eq!(overview.remaining_km(), 0);
        assert_eq!(overview.percent_complete(), 100);
        assert!(!overview.all_done);
        assert_eq!(overview.segment, "Rameshwaram");
        assert_eq!(overview.times.len(), content::ROUTE_PHASES.len());
    }

    #[test]
    fn test_route_overview_all_done() {
        let mut progress = RouteProgress::default();
        for index in 0..content::ROUTE_PHASES.len() {
            progress.completed.insert(index, true);
        }

        let overview = RouteOverview::from_progress(progress, &TripClock::default());
        assert!(overview.all_done);
        assert_eq!(overview.segment, "Arrived");
    }

    #[test]
    fn test_route_phase_labels() {
        let drive = RoutePhase::Drive {
            from: "Salem",
            to: "Madurai",
            distance_km: 160,
            highway: "NH 44",
        };
        assert_eq!(drive.label(), "Salem → Madurai · 160 km · NH 44");
        assert_eq!(drive.maps_url(), None);

        let arrival = RoutePhase::Arrival {
            name: "Rameshwaram",
            note: "",
            maps_url: Some("https://maps.example/rmm"),
        };
        assert_eq!(arrival.label(), "Arrive Rameshwaram");
        assert_eq!(arrival.maps_url(), Some("https://maps.example/rmm"));
    }

    #[test]
    fn test_packing_state() {
        let mut state = PackingState::default();
        assert!(!state.is_checked("car", 0));

        state.set("car", 0, true);
        state.set("car", 1, true);
        state.set("car", 1, false);
        assert!(state.is_checked("car", 0));
        assert_eq!(state.checked_count("car"), 1);
        assert_eq!(state.checked_count("parents"), 0);

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json, json!({"car": {"0": true, "1": false}}));
    }
}
