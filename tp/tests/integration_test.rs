//! Integration tests for TourPlan
//!
//! These verify end-to-end behavior of the planner against a real store
//! and of the `tp` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use prefstore::{PreferenceRecord, PreferenceStore, SqlitePreferenceStore};
use tempfile::TempDir;
use tourplan::config::STORE_ENV;
use tourplan::itinerary::{Section, generate};
use tourplan::session::{Greeting, Planner};

fn tp(store: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("tp").expect("tp binary");
    cmd.env(STORE_ENV, store).env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

fn plan_args<'a>(user: &'a str, city: &'a str, time: &'a str, interests: &'a str) -> Vec<&'a str> {
    vec![
        "plan", "--user", user, "--city", city, "--time", time, "--budget", "$100", "--interests", interests,
        "--start", "Hotel Lumen",
    ]
}

// =============================================================================
// Planner Tests
// =============================================================================

#[test]
fn test_paris_scenario_end_to_end() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let store = SqlitePreferenceStore::open(temp.path().join("preferences.db")).unwrap();
    store
        .save(&PreferenceRecord::new("u1", "Paris", "10am - 4pm", "$100", "food", "Hotel Lumen"))
        .unwrap();

    let doc = generate("Paris", "10am - 4pm", "$100", "food", "Hotel Lumen");
    let text = doc.to_string();
    assert!(text.contains("Interests: Food"));
    assert!(text.contains("Starting Point: Hotel Lumen"));

    let morning = doc.section(Section::Morning).unwrap();
    assert!(morning.contains("Hotel Lumen"));
    assert!(morning.contains("10am"));
}

#[test]
fn test_rendered_sections_appear_in_fixed_order() {
    for time in ["10am - 4pm", "all day", "9-12-3", ""] {
        let text = generate("Kyoto", time, "¥5000", "temples", "station").to_string();
        let positions: Vec<usize> = [
            "\nMorning: ",
            "\nLate Morning to Lunch: ",
            "\nAfternoon: ",
            "\nLate Afternoon to Evening: ",
        ]
        .iter()
        .map(|heading| text.find(heading).expect("heading present"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "out of order for {time:?}");
    }
}

#[test]
fn test_revisit_greets_with_last_saved_values() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let db = temp.path().join("preferences.db");

    {
        let planner = Planner::new(SqlitePreferenceStore::open(&db).unwrap()).unwrap();
        assert_eq!(planner.greet("u1").unwrap(), Greeting::New);
        planner
            .plan(&PreferenceRecord::new("u1", "Paris", "10am - 4pm", "$100", "food", "Hotel Lumen"))
            .unwrap();
    }

    let planner = Planner::new(SqlitePreferenceStore::open(&db).unwrap()).unwrap();
    assert_eq!(
        planner.greet("u1").unwrap(),
        Greeting::Returning {
            interests: "food".to_string(),
            city: "Paris".to_string()
        }
    );
}

// =============================================================================
// CLI Tests
// =============================================================================

#[test]
fn test_cli_plan_then_recall() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let db = temp.path().join("prefs.db");

    tp(&db)
        .args(plan_args("u1", "Paris", "10am - 4pm", "food"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Interests: Food"))
        .stdout(predicate::str::contains("Start your day at Hotel Lumen around 10am."));

    tp(&db)
        .args(["recall", "u1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Welcome back! Last time, you were interested in food in Paris.",
        ));

    tp(&db)
        .args(["recall", "u1", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"starting_point\": \"Hotel Lumen\""));
}

#[test]
fn test_cli_recall_unknown_user() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let db = temp.path().join("prefs.db");

    tp(&db)
        .args(["recall", "never-seen-id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello! Let's plan your trip."))
        .stdout(predicate::str::contains("No saved preferences"));

    tp(&db)
        .args(["recall", "never-seen-id", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("null\n"));
}

#[test]
fn test_cli_plan_rejects_blank_field_without_saving() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let db = temp.path().join("prefs.db");

    tp(&db)
        .args(plan_args("u1", "Paris", "10am - 4pm", "   "))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please fill in all fields"));

    let store = SqlitePreferenceStore::open(&db).unwrap();
    assert_eq!(store.load("u1").unwrap(), None);
}

#[test]
fn test_cli_plan_rejects_blank_user() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let db = temp.path().join("prefs.db");

    tp(&db)
        .args(plan_args("", "Paris", "10am - 4pm", "food"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid user id"));
}

#[test]
fn test_cli_preview_warns_on_fallback_window() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let db = temp.path().join("prefs.db");

    tp(&db)
        .args([
            "preview", "--city", "Lima", "--time", "whenever", "--budget", "S/ 200", "--interests", "markets",
            "--start", "Miraflores",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Time: 10:00 AM - 4:00 PM"))
        .stderr(predicate::str::contains("Couldn't read that time range"));

    assert!(!db.exists(), "preview must not create the store");
}

#[test]
fn test_cli_preview_warning_matches_rendered_window() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let db = temp.path().join("prefs.db");
    let config = temp.path().join("tourplan.yml");
    // Older config files may still carry a window section; it must not leak into output.
    std::fs::write(
        &config,
        format!(
            "store-path: {}\nlog-level: warn\ndefault-window:\n  start: 9am\n  end: 5pm\n",
            db.display()
        ),
    )
    .unwrap();

    tp(&db)
        .args(["--config", config.to_str().unwrap()])
        .args([
            "preview", "--city", "Lima", "--time", "whenever", "--budget", "S/ 200", "--interests", "markets",
            "--start", "Miraflores",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Time: 10:00 AM - 4:00 PM"))
        .stderr(predicate::str::contains("assuming 10:00 AM - 4:00 PM."))
        .stderr(predicate::str::contains("9am").not());
}

#[test]
fn test_cli_preview_json() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    tp(&temp.path().join("prefs.db"))
        .args([
            "preview", "--city", "Paris", "--time", "10am - 4pm", "--budget", "$100", "--interests", "food",
            "--start", "Hotel Lumen", "--format", "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"source\": \"parsed\""))
        .stdout(predicate::str::contains("\"section\": \"late-morning-to-lunch\""));
}
