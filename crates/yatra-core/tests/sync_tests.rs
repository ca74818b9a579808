mod common;

use yatra_core::{
    models::{StepOutcome, StepStatus},
    schedule::TripClock,
    sync::{PackingTracker, RouteTracker, StepTracker, TripSession},
    Caller,
};

use common::create_test_trip;

#[tokio::test]
async fn test_packing_tracker_persists_through_trip() {
    let (_temp_dir, trip) = create_test_trip().await;
    let caller = Caller::viewer("shruti");
    let session = TripSession::new(trip.clone(), caller.clone());

    let mut tracker = PackingTracker::load(session).await.unwrap();
    assert!(tracker.toggle("shruti", 0).await.unwrap());

    let stored = trip.get_packing(&caller).await.unwrap();
    assert!(stored.is_checked("shruti", 0));
}

#[tokio::test]
async fn test_anonymous_session_cannot_load() {
    let (_temp_dir, trip) = create_test_trip().await;
    let session = TripSession::new(trip.clone(), Caller::anonymous());

    assert!(PackingTracker::load(session).await.is_err());
}

#[tokio::test]
async fn test_step_tracker_advances_through_trip() {
    let (_temp_dir, trip) = create_test_trip().await;
    let caller = Caller::viewer("ma");
    let session = TripSession::new(trip.clone(), caller.clone());

    let mut tracker = StepTracker::load(session).await.unwrap();
    let stored = tracker
        .advance(StepOutcome::Done, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.slug, "check-in");
    assert_eq!(stored.completed_by.as_deref(), Some("ma"));
    assert_eq!(tracker.active().unwrap().slug, "evening-recon");

    let steps = trip.list_steps(&caller).await.unwrap();
    assert_eq!(steps[0].record.status, StepStatus::Done);
    assert_eq!(steps[1].record.status, StepStatus::Active);
}

#[tokio::test]
async fn test_route_tracker_flush_persists_latest_document() {
    let (_temp_dir, trip) = create_test_trip().await;
    let caller = Caller::viewer("shantanu");
    let session = TripSession::new(trip.clone(), caller.clone());

    let tracker = RouteTracker::load(session, TripClock::default())
        .await
        .unwrap();
    tracker.toggle(0).unwrap();
    tracker.toggle(1).unwrap();
    tracker.set_start_time(Some(540)).unwrap();
    assert_eq!(tracker.overview().progress_km, 200);

    tracker.flush().await.unwrap();

    let overview = trip.route_overview(&caller).await.unwrap();
    assert!(overview.progress.is_completed(0));
    assert!(overview.progress.is_completed(1));
    assert_eq!(overview.progress.start_time, Some(540));
    assert_eq!(tracker.last_error(), None);
}
