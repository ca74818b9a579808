//! Tests for the trip module.

use serde_json::json;
use tempfile::TempDir;

use super::*;
use crate::{
    access::Caller,
    content,
    db::Database,
    error::TripError,
    models::{RouteProgress, StepStatus},
    params::{
        AdvanceStep, LocateOnRoute, PackItem, PutRouteProgress, RouteId, SetRouteStart,
        TogglePackingItem, TogglePhase,
    },
};

/// Helper function to create a test trip
async fn create_test_trip() -> (TempDir, Trip) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let trip = TripBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create trip");
    (temp_dir, trip)
}

fn advance(slug: &str, status: &str) -> AdvanceStep {
    AdvanceStep {
        slug: slug.to_string(),
        status: status.to_string(),
        skip_reason: None,
    }
}

#[tokio::test]
async fn test_list_steps_seeds_on_first_read() {
    let (_temp_dir, trip) = create_test_trip().await;

    let steps = trip.list_steps(&Caller::viewer("ma")).await.unwrap();

    assert_eq!(steps.len(), content::STEPS.len());
    assert_eq!(steps[0].record.status, StepStatus::Active);
    assert!(steps[1..]
        .iter()
        .all(|v| v.record.status == StepStatus::Upcoming));
    assert_eq!(steps[0].definition.slug, content::STEPS[0].slug);
}

#[tokio::test]
async fn test_anonymous_caller_is_rejected() {
    let (_temp_dir, trip) = create_test_trip().await;

    let err = trip.list_steps(&Caller::anonymous()).await.unwrap_err();
    assert!(matches!(err, TripError::Unauthorized));
    assert_eq!(err.http_status(), 401);
}

#[tokio::test]
async fn test_advance_done_promotes_next() {
    let (_temp_dir, trip) = create_test_trip().await;
    let caller = Caller::viewer("shruti");

    let view = trip
        .advance_step(&caller, &advance("check-in", "done"))
        .await
        .unwrap();

    assert_eq!(view.record.status, StepStatus::Done);
    assert!(view.record.completed_at.is_some());
    assert_eq!(view.record.completed_by.as_deref(), Some("shruti"));
    assert_eq!(view.record.skip_reason, None);

    let steps = trip.list_steps(&caller).await.unwrap();
    assert_eq!(steps[1].record.status, StepStatus::Active);
    assert_eq!(steps[2].record.status, StepStatus::Upcoming);
}

#[tokio::test]
async fn test_advance_skipped_keeps_reason_without_timestamp() {
    let (_temp_dir, trip) = create_test_trip().await;
    let caller = Caller::viewer("ma");
    let params = AdvanceStep {
        skip_reason: Some("Too tired".to_string()),
        ..advance("evening-recon", "skipped")
    };

    let view = trip.advance_step(&caller, &params).await.unwrap();

    assert_eq!(view.record.status, StepStatus::Skipped);
    assert_eq!(view.record.skip_reason.as_deref(), Some("Too tired"));
    assert_eq!(view.record.completed_at, None);
}

#[tokio::test]
async fn test_advance_unknown_slug() {
    let (_temp_dir, trip) = create_test_trip().await;

    let err = trip
        .advance_step(&Caller::viewer("ma"), &advance("nonexistent", "done"))
        .await
        .unwrap_err();

    assert!(matches!(err, TripError::StepNotFound { ref slug } if slug == "nonexistent"));
    assert_eq!(err.http_status(), 404);
}

#[tokio::test]
async fn test_advance_invalid_status_changes_nothing() {
    let (_temp_dir, trip) = create_test_trip().await;
    let caller = Caller::viewer("ma");

    let err = trip
        .advance_step(&caller, &advance("check-in", "active"))
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), 400);

    let steps = trip.list_steps(&caller).await.unwrap();
    assert_eq!(steps[0].record.status, StepStatus::Active);
}

#[tokio::test]
async fn test_reset_requires_admin() {
    let (_temp_dir, trip) = create_test_trip().await;

    let err = trip.reset_steps(&Caller::viewer("ma")).await.unwrap_err();
    assert!(matches!(err, TripError::Forbidden { .. }));
    assert_eq!(err.http_status(), 403);
}

#[tokio::test]
async fn test_reset_restores_initial_state() {
    let (_temp_dir, trip) = create_test_trip().await;
    let admin = Caller::admin("shantanu");

    trip.advance_step(&admin, &advance("check-in", "done"))
        .await
        .unwrap();
    trip.advance_step(&admin, &advance("evening-recon", "skipped"))
        .await
        .unwrap();

    let count = trip.reset_steps(&admin).await.unwrap();
    assert_eq!(count, content::STEPS.len());

    let steps = trip.list_steps(&admin).await.unwrap();
    assert_eq!(steps[0].record.status, StepStatus::Active);
    assert!(steps
        .iter()
        .all(|v| v.record.completed_at.is_none() && v.record.skip_reason.is_none()));
}

#[tokio::test]
async fn test_current_step_and_next() {
    let (_temp_dir, trip) = create_test_trip().await;
    let caller = Caller::viewer("ma");

    trip.advance_step(&caller, &advance("check-in", "done"))
        .await
        .unwrap();
    let now = trip.current_step(&caller).await.unwrap();

    assert!(!now.done);
    assert_eq!(now.step.unwrap().definition.slug, "evening-recon");
    assert_eq!(now.next_step.unwrap().definition.slug, "spatika-lingam");
}

#[tokio::test]
async fn test_current_step_when_everything_finished() {
    let (_temp_dir, trip) = create_test_trip().await;
    let caller = Caller::viewer("ma");

    for step in content::STEPS {
        trip.advance_step(&caller, &advance(step.slug, "done"))
            .await
            .unwrap();
    }
    let now = trip.current_step(&caller).await.unwrap();

    assert!(now.done);
    assert!(now.step.is_none());
    assert!(now.next_step.is_none());
}

#[tokio::test]
async fn test_fresh_itinerary_is_on_plan() {
    let (_temp_dir, trip) = create_test_trip().await;

    let itinerary = trip.itinerary(&Caller::viewer("ma")).await.unwrap();

    assert_eq!(itinerary.current_slug, Some("check-in"));
    assert_eq!(itinerary.finished_count(), 0);
    for view in &itinerary.steps {
        let time = itinerary.time_for(view.definition.slug).unwrap();
        assert_eq!(time.time, view.definition.time_window);
        assert!(!time.shifted);
    }
}

#[tokio::test]
async fn test_missing_route_document_reads_empty() {
    let (_temp_dir, trip) = create_test_trip().await;

    let progress = trip
        .get_route_progress(&Caller::viewer("ma"), &RouteId::default())
        .await
        .unwrap();

    assert_eq!(progress, RouteProgress::default());
}

#[tokio::test]
async fn test_blank_route_id_is_invalid() {
    let (_temp_dir, trip) = create_test_trip().await;
    let params = PutRouteProgress {
        id: "  ".to_string(),
        progress: Default::default(),
    };

    let err = trip
        .put_route_progress(&Caller::viewer("ma"), &params)
        .await
        .unwrap_err();
    assert!(matches!(err, TripError::InvalidInput { ref field, .. } if field == "id"));
}

#[tokio::test]
async fn test_legacy_route_document_is_upgraded() {
    let (_temp_dir, trip) = create_test_trip().await;
    let db = Database::new(trip.database_path()).unwrap();
    db.put_route_document(
        content::ROUTE_ID,
        &json!({"0": true, "1": true, "2": false}),
        "old-client",
        jiff::Timestamp::now(),
    )
    .unwrap();

    let overview = trip.route_overview(&Caller::viewer("ma")).await.unwrap();

    assert!(overview.progress.is_completed(1));
    assert!(!overview.progress.is_completed(2));
    assert!(overview.progress.completed_at.is_empty());
    assert_eq!(overview.progress.start_time, None);
    assert_eq!(overview.progress_km, 200);
    assert_eq!(overview.segment, "SLM → MDU");
}

#[tokio::test]
async fn test_toggle_phase_round_trip() {
    let (_temp_dir, trip) = create_test_trip().await;
    let caller = Caller::viewer("shantanu");

    let overview = trip
        .toggle_route_phase(&caller, &TogglePhase { index: 1 })
        .await
        .unwrap();
    assert!(overview.progress.is_completed(1));
    assert!(overview.progress.completed_at.contains_key(&1));
    assert_eq!(overview.progress_km, 200);

    let overview = trip
        .toggle_route_phase(&caller, &TogglePhase { index: 1 })
        .await
        .unwrap();
    assert!(!overview.progress.is_completed(1));
    assert!(!overview.progress.completed_at.contains_key(&1));
    assert_eq!(overview.progress_km, 0);

    let db = Database::new(trip.database_path()).unwrap();
    let stored = db.get_route_document(content::ROUTE_ID).unwrap().unwrap();
    assert_eq!(stored["_version"], 2);
}

#[tokio::test]
async fn test_set_route_start_shifts_route() {
    let (_temp_dir, trip) = create_test_trip().await;
    let caller = Caller::viewer("shantanu");

    let overview = trip
        .set_route_start(
            &caller,
            &SetRouteStart {
                start_time: Some("9:00 AM".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(overview.progress.start_time, Some(540));
    assert!(overview.times.iter().all(|t| t.delta == 30 && t.shifted));

    let overview = trip
        .set_route_start(&caller, &SetRouteStart::default())
        .await
        .unwrap();
    assert_eq!(overview.progress.start_time, None);
    assert!(overview.times.iter().all(|t| !t.shifted));
}

#[tokio::test]
async fn test_packing_toggle_and_put() {
    let (_temp_dir, trip) = create_test_trip().await;
    let caller = Caller::viewer("parents");
    let toggle = TogglePackingItem {
        list_key: "parents".to_string(),
        item_index: 2,
    };

    assert!(trip.toggle_packing_item(&caller, &toggle).await.unwrap());
    assert!(trip
        .get_packing(&caller)
        .await
        .unwrap()
        .is_checked("parents", 2));
    assert!(!trip.toggle_packing_item(&caller, &toggle).await.unwrap());

    trip.put_packing_item(
        &caller,
        &PackItem {
            list_key: "car".to_string(),
            item_index: 0,
            checked: true,
        },
    )
    .await
    .unwrap();

    let state = trip.get_packing(&caller).await.unwrap();
    assert!(!state.is_checked("parents", 2));
    assert_eq!(state.checked_count("car"), 1);
}

#[tokio::test]
async fn test_locate_on_route() {
    let (_temp_dir, trip) = create_test_trip().await;
    let madurai = content::WAYPOINTS[2];

    let position = trip
        .locate_on_route(&LocateOnRoute {
            lat: madurai.lat,
            lon: madurai.lon,
        })
        .unwrap()
        .unwrap();
    assert!((position.route_km - 360.0).abs() < 0.5);

    let far = trip
        .locate_on_route(&LocateOnRoute {
            lat: 28.6139,
            lon: 77.2090,
        })
        .unwrap();
    assert!(far.is_none());
}
