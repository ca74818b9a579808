use tempfile::TempDir;
use yatra_core::{Trip, TripBuilder};

/// Helper function to create a test trip
pub async fn create_test_trip() -> (TempDir, Trip) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let trip = TripBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create trip");
    (temp_dir, trip)
}
