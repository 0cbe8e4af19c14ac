//! CLI integration tests for agenda
//!
//! These tests run the binary end to end against a temporary working
//! directory, verifying that commands compose correctly and that the data
//! file round-trips between invocations.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command instance for the agenda binary
fn agenda_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("agenda"))
}

// =============================================================================
// Add Tests
// =============================================================================

#[test]
fn test_add_creates_task_and_file() {
    let dir = TempDir::new().unwrap();

    agenda_cmd()
        .current_dir(dir.path())
        .args(["add", "Buy milk", "2024-01-02 09:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added task 1: Buy milk"));

    let contents = fs::read_to_string(dir.path().join("tasks.csv")).unwrap();
    assert_eq!(contents, "1,Buy milk,2024-01-02 09:00\n");
}

#[test]
fn test_add_assigns_increasing_ids_across_runs() {
    let dir = TempDir::new().unwrap();

    agenda_cmd()
        .current_dir(dir.path())
        .args(["add", "First", "2024-01-01 10:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added task 1"));

    agenda_cmd()
        .current_dir(dir.path())
        .args(["add", "Second", "2024-01-02 10:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added task 2"));
}

#[test]
fn test_add_rejects_malformed_date_and_leaves_no_file() {
    let dir = TempDir::new().unwrap();

    agenda_cmd()
        .current_dir(dir.path())
        .args(["add", "Bad", "02/01/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid due date"));

    assert!(!dir.path().join("tasks.csv").exists());
}

#[test]
fn test_add_json_output() {
    let dir = TempDir::new().unwrap();

    let output = agenda_cmd()
        .current_dir(dir.path())
        .args(["add", "Buy milk", "2024-01-02 09:00", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["title"], "Buy milk");
    assert_eq!(json["due"], "2024-01-02 09:00");
}

// =============================================================================
// List Tests
// =============================================================================

#[test]
fn test_list_empty() {
    let dir = TempDir::new().unwrap();

    agenda_cmd()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_list_sorts_by_due_date() {
    let dir = TempDir::new().unwrap();

    agenda_cmd()
        .current_dir(dir.path())
        .args(["add", "Buy milk", "2024-01-02 09:00"])
        .assert()
        .success();

    agenda_cmd()
        .current_dir(dir.path())
        .args(["add", "Call dentist", "2024-01-01 10:00"])
        .assert()
        .success();

    let output = agenda_cmd()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    let dentist = stdout.find("Call dentist").unwrap();
    let milk = stdout.find("Buy milk").unwrap();
    assert!(dentist < milk, "earlier due date should come first");
}

#[test]
fn test_list_json_is_sorted_array() {
    let dir = TempDir::new().unwrap();

    agenda_cmd()
        .current_dir(dir.path())
        .args(["add", "Buy milk", "2024-01-02 09:00"])
        .assert()
        .success();

    agenda_cmd()
        .current_dir(dir.path())
        .args(["add", "Call dentist", "2024-01-01 10:00"])
        .assert()
        .success();

    let output = agenda_cmd()
        .current_dir(dir.path())
        .args(["list", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let items = json.as_array().unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Call dentist");
    assert_eq!(items[1]["title"], "Buy milk");
}

// =============================================================================
// Show Tests
// =============================================================================

#[test]
fn test_show_displays_task() {
    let dir = TempDir::new().unwrap();

    agenda_cmd()
        .current_dir(dir.path())
        .args(["add", "Buy milk", "2024-01-02 09:00"])
        .assert()
        .success();

    agenda_cmd()
        .current_dir(dir.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("2024-01-02 09:00"));
}

#[test]
fn test_show_unknown_id_fails() {
    let dir = TempDir::new().unwrap();

    agenda_cmd()
        .current_dir(dir.path())
        .args(["show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task not found: 42"));
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_removes_task() {
    let dir = TempDir::new().unwrap();

    agenda_cmd()
        .current_dir(dir.path())
        .args(["add", "Buy milk", "2024-01-02 09:00"])
        .assert()
        .success();

    agenda_cmd()
        .current_dir(dir.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted task 1"));

    let contents = fs::read_to_string(dir.path().join("tasks.csv")).unwrap();
    assert_eq!(contents, "");
}

#[test]
fn test_delete_unknown_id_fails() {
    let dir = TempDir::new().unwrap();

    agenda_cmd()
        .current_dir(dir.path())
        .args(["delete", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task not found: 7"));
}

#[test]
fn test_delete_non_numeric_id_fails() {
    let dir = TempDir::new().unwrap();

    agenda_cmd()
        .current_dir(dir.path())
        .args(["delete", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid task ID"));
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_comma_titles_are_escaped_on_disk() {
    let dir = TempDir::new().unwrap();

    agenda_cmd()
        .current_dir(dir.path())
        .args(["add", "Eggs, bread, jam", "2024-01-02 09:00"])
        .assert()
        .success();

    let contents = fs::read_to_string(dir.path().join("tasks.csv")).unwrap();
    assert_eq!(contents, "1,Eggs; bread; jam,2024-01-02 09:00\n");

    // The title reads back with its commas restored
    agenda_cmd()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Eggs, bread, jam"));
}

#[test]
fn test_corrupt_lines_are_skipped_with_warning() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("tasks.csv"),
        "1,Buy milk,2024-01-02 09:00\nnot a task\n3,Call dentist,2024-01-01 10:00\n",
    )
    .unwrap();

    agenda_cmd()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("Call dentist"))
        .stderr(predicate::str::contains("skipping line 2"));

    // ID assignment resumes after the highest surviving ID
    agenda_cmd()
        .current_dir(dir.path())
        .args(["add", "Next", "2024-01-05 10:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added task 4"));
}

#[test]
fn test_file_flag_overrides_location() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("elsewhere").join("agenda.csv");

    agenda_cmd()
        .current_dir(dir.path())
        .args(["add", "Buy milk", "2024-01-02 09:00"])
        .args(["--file", data.to_str().unwrap()])
        .assert()
        .success();

    assert!(data.exists());
    assert!(!dir.path().join("tasks.csv").exists());
}

// =============================================================================
// Shell Tests
// =============================================================================

#[test]
fn test_shell_add_view_exit() {
    let dir = TempDir::new().unwrap();

    agenda_cmd()
        .current_dir(dir.path())
        .arg("shell")
        .write_stdin("1\nBuy milk\n2024-01-02 09:00\n2\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added task 1"))
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("Tasks saved. Goodbye!"));

    let contents = fs::read_to_string(dir.path().join("tasks.csv")).unwrap();
    assert_eq!(contents, "1,Buy milk,2024-01-02 09:00\n");
}

#[test]
fn test_shell_survives_bad_input() {
    let dir = TempDir::new().unwrap();

    agenda_cmd()
        .current_dir(dir.path())
        .arg("shell")
        .write_stdin("bogus\n1\nTask\nnot a date\n3\nxyz\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice"))
        .stdout(predicate::str::contains("Invalid date format"))
        .stdout(predicate::str::contains("Tasks saved. Goodbye!"));
}

#[test]
fn test_shell_sees_previous_session_tasks() {
    let dir = TempDir::new().unwrap();

    agenda_cmd()
        .current_dir(dir.path())
        .args(["add", "From CLI", "2024-01-02 09:00"])
        .assert()
        .success();

    agenda_cmd()
        .current_dir(dir.path())
        .arg("shell")
        .write_stdin("2\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("From CLI"));
}
