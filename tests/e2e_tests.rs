//! End-to-End Tests for the Pomodoro widget binary.
//!
//! These tests run the compiled binary with piped stdin:
//! - Interactive session start/pause and quit
//! - Theme toggling persisted across runs
//! - The `theme` subcommand
//! - Argument validation and shell completions

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

/// Creates a temporary preference file path.
fn create_temp_prefs_path() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    (dir, path)
}

/// Builds a command isolated from the caller's environment.
fn widget_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pomodoro-widget").unwrap();
    cmd.env_remove("COLORFGBG").env_remove("RUST_LOG");
    cmd
}

fn stored_theme(path: &Path) -> Option<String> {
    let raw = fs::read_to_string(path).ok()?;
    let value: serde_json::Value = serde_json::from_str(&raw).ok()?;
    value["theme"].as_str().map(str::to_string)
}

// ============================================================================
// Interactive session
// ============================================================================

#[test]
fn session_starts_pauses_and_quits() {
    let (_dir, prefs) = create_temp_prefs_path();

    widget_cmd()
        .args(["run", "--prefs"])
        .arg(&prefs)
        .write_stdin("start\n \nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pomodoro widget (25 minute sessions)"))
        .stdout(predicate::str::contains("[Pause the timer]"))
        .stdout(predicate::str::contains("[Start the 25-minute work session]"));
}

#[test]
fn session_ends_at_end_of_input() {
    let (_dir, prefs) = create_temp_prefs_path();

    widget_cmd()
        .arg("run")
        .arg("--prefs")
        .arg(&prefs)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("25:00"));
}

#[test]
fn custom_minutes_reset_announcement() {
    let (_dir, prefs) = create_temp_prefs_path();

    widget_cmd()
        .args(["run", "--minutes", "50", "--prefs"])
        .arg(&prefs)
        .write_stdin("r\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("50:00"))
        .stdout(predicate::str::contains("Timer reset to 50 minutes."));
}

#[test]
fn note_lines_do_not_trigger_shortcuts() {
    let (_dir, prefs) = create_temp_prefs_path();

    widget_cmd()
        .args(["run", "--prefs"])
        .arg(&prefs)
        .write_stdin("> r r r\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Timer reset").not())
        .stdout(predicate::str::contains("[Pause the timer]").not());
}

// ============================================================================
// Theme
// ============================================================================

#[test]
fn theme_toggle_is_remembered() {
    let (_dir, prefs) = create_temp_prefs_path();

    widget_cmd()
        .args(["run", "--theme", "light", "--prefs"])
        .arg(&prefs)
        .write_stdin("t\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"))
        .stdout(predicate::str::contains("[Dark Mode]"))
        .stdout(predicate::str::contains("[Light Mode]"))
        .stdout(predicate::str::contains("Dark mode enabled."));

    assert_eq!(stored_theme(&prefs), Some("dark".to_string()));

    widget_cmd()
        .args(["run", "--prefs"])
        .arg(&prefs)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"))
        .stdout(predicate::str::contains("[Light Mode]"))
        .stdout(predicate::str::contains("[Dark Mode]").not());
}

#[test]
fn theme_command_sets_and_shows() {
    let (_dir, prefs) = create_temp_prefs_path();

    widget_cmd()
        .args(["theme", "--prefs"])
        .arg(&prefs)
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light (system default"));

    widget_cmd()
        .args(["theme", "dark", "--prefs"])
        .arg(&prefs)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dark mode enabled."));

    widget_cmd()
        .args(["theme", "--prefs"])
        .arg(&prefs)
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark (saved"));
}

// ============================================================================
// Arguments
// ============================================================================

#[test]
fn rejects_out_of_range_minutes() {
    widget_cmd()
        .args(["run", "--minutes", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("0"));
}

#[test]
fn rejects_unknown_theme() {
    widget_cmd()
        .args(["theme", "sepia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown theme"));
}

#[test]
fn generates_completions() {
    widget_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomodoro-widget"));
}
