use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// A plain-output command against the given database, signed in as `user`
fn yatra_cmd(db_path: &Path, user: Option<&str>) -> Command {
    let mut cmd = Command::cargo_bin("yatra").expect("Failed to find yatra binary");
    cmd.env_remove("YATRA_USER")
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    if let Some(user) = user {
        cmd.args(["--user", user]);
    }
    cmd
}

#[test]
fn test_cli_plan_is_default_command() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    yatra_cmd(&db_path, Some("asha"))
        .assert()
        .success()
        .stdout(predicate::str::contains("# Itinerary (0/"))
        .stdout(predicate::str::contains("## Day 0"))
        .stdout(predicate::str::contains("### Hotel Check-in"));
}

#[test]
fn test_cli_plan_in_hindi() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    yatra_cmd(&db_path, Some("asha"))
        .args(["plan", "--lang", "hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("होटल चेक-इन"));
}

#[test]
fn test_cli_anonymous_user_is_rejected() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    yatra_cmd(&db_path, None)
        .arg("now")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unauthorized"));
}

#[test]
fn test_cli_user_from_environment() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    yatra_cmd(&db_path, None)
        .env("YATRA_USER", "asha")
        .arg("now")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Now"));
}

#[test]
fn test_cli_advance_current_step() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    yatra_cmd(&db_path, Some("asha"))
        .args(["advance", "done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked **Hotel Check-in** done at"));

    yatra_cmd(&db_path, Some("asha"))
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Itinerary (1/"));
}

#[test]
fn test_cli_skip_with_reason() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    yatra_cmd(&db_path, Some("asha"))
        .args(["advance", "skipped", "--reason", "Train was late"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Skipped **Hotel Check-in**: Train was late.",
        ));
}

#[test]
fn test_cli_advance_unknown_slug() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    yatra_cmd(&db_path, Some("asha"))
        .args(["advance", "done", "--slug", "ferry-ride"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Step 'ferry-ride' not found"));
}

#[test]
fn test_cli_reset_requires_admin() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    yatra_cmd(&db_path, Some("asha"))
        .arg("reset")
        .assert()
        .failure()
        .stderr(predicate::str::contains("admin access required"));

    yatra_cmd(&db_path, Some("asha"))
        .args(["--admin", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The first step is active again."));
}

#[test]
fn test_cli_route_toggle_and_start() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    yatra_cmd(&db_path, Some("asha"))
        .args(["route", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Route · 0/552 km (0%)"));

    yatra_cmd(&db_path, Some("asha"))
        .args(["route", "toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Route · 200/552 km"));

    yatra_cmd(&db_path, Some("asha"))
        .args(["route", "start", "9:00 AM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Start**: 9:00 AM (edited)"));

    yatra_cmd(&db_path, Some("asha"))
        .args(["route", "clear-start"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(edited)").not());
}

#[test]
fn test_cli_route_rejects_bad_input() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    yatra_cmd(&db_path, Some("asha"))
        .args(["route", "toggle", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input for field 'index'"));

    yatra_cmd(&db_path, Some("asha"))
        .args(["route", "start", "after lunch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("start_time"));
}

#[test]
fn test_cli_route_locate() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    yatra_cmd(&db_path, None)
        .args(["route", "locate", "--lat", "9.9252", "--lon", "78.1198"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You are at km"));

    yatra_cmd(&db_path, None)
        .args(["route", "locate", "--lat", "28.6139", "--lon", "77.2090"])
        .assert()
        .success()
        .stdout(predicate::str::contains("too far from the route"));
}

#[test]
fn test_cli_pack_toggle() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    yatra_cmd(&db_path, Some("asha"))
        .args(["pack", "toggle", "car", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Packed: Water bottles × 8"));

    yatra_cmd(&db_path, Some("asha"))
        .args(["pack", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- [x] 0. Water bottles × 8"))
        .stdout(predicate::str::contains("## Car & Shared · MG Hector (1/"));

    yatra_cmd(&db_path, Some("asha"))
        .args(["pack", "toggle", "car", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unpacked: Water bottles × 8"));
}

#[test]
fn test_cli_pack_unknown_list() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    yatra_cmd(&db_path, Some("asha"))
        .args(["pack", "toggle", "boat", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown packing list 'boat'"));
}

#[test]
fn test_cli_weather_rejects_bad_coordinates() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    yatra_cmd(&db_path, None)
        .args(["weather", "--lat", "123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input for field 'lat'"));
}
