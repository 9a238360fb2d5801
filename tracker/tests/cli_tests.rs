//! End-to-end tests of the `tracker` binary.

use std::path::Path;

use assert_cmd::Command;
use chrono::{Duration, Local};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn tracker(data: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tracker").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--project")
        .arg(data.parent().unwrap())
        .arg("--file")
        .arg(data);
    cmd
}

fn tomorrow() -> String {
    (Local::now().date_naive() + Duration::days(1)).to_string()
}

fn stored(data: &Path) -> Vec<Value> {
    let content = std::fs::read_to_string(data).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn create(data: &Path, title: &str, category: &str) {
    tracker(data)
        .args(["create", title, "some description", category, &tomorrow(), "средний"])
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully created"));
}

#[test]
fn test_create_and_list() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data.json");

    tracker(&data)
        .args(["create", "fix bug", "in the parser", "work", &tomorrow(), "высокий"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task 1 was successfully created."));

    tracker(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tasks found:"))
        .stdout(predicate::str::contains("Title:       Fix bug"))
        .stdout(predicate::str::contains("Category:    Work"))
        .stdout(predicate::str::contains("Status:      Не выполнена"));

    let records = stored(&data);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["priority"], "Высокий");
}

#[test]
fn test_create_with_past_deadline_changes_nothing() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data.json");

    tracker(&data)
        .args(["create", "old", "task", "work", "2000-01-01", "высокий"])
        .assert()
        .success()
        .stdout(predicate::str::contains("must be in the future"))
        .stdout(predicate::str::contains("No tasks created."));

    assert!(!data.exists());
}

#[test]
fn test_find_by_keywords_and_category() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data.json");
    create(&data, "write report", "work");
    create(&data, "buy milk", "home");

    tracker(&data)
        .args(["find", "--keywords", "REPORT nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Write report"))
        .stdout(predicate::str::contains("Buy milk").not());

    tracker(&data)
        .args(["find", "-c", "HOME"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("Write report").not());

    tracker(&data)
        .args(["find", "-c", "garden"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_modify_and_list_current() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data.json");
    create(&data, "first", "work");
    create(&data, "second", "work");

    tracker(&data)
        .args(["modify", "1", "--status", "выполнена", "--title", "First done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 task(s) were successfully modified."));

    tracker(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Second"))
        .stdout(predicate::str::contains("First done").not());

    let records = stored(&data);
    assert_eq!(records[0]["status"], "Выполнена");
    assert_eq!(records[0]["title"], "First done");
}

#[test]
fn test_modify_unknown_id() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data.json");
    create(&data, "only", "work");

    tracker(&data)
        .args(["modify", "9999", "--title", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No task found"));

    assert_eq!(stored(&data)[0]["title"], "Only");
}

#[test]
fn test_modify_with_bad_priority() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data.json");
    create(&data, "only", "work");

    tracker(&data)
        .args(["modify", "1", "--priority", "urgent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task's priority must be one of"))
        .stdout(predicate::str::contains("No tasks modified."));
}

#[test]
fn test_delete_by_category() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data.json");
    create(&data, "w1", "work");
    create(&data, "h1", "home");
    create(&data, "w2", "work");
    create(&data, "h2", "home");

    tracker(&data)
        .args(["delete", "--category", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 task(s) were deleted successfully."));

    let titles: Vec<Value> = stored(&data).iter().map(|r| r["title"].clone()).collect();
    assert_eq!(titles, vec!["H1", "H2"]);
}

#[test]
fn test_delete_everything_needs_confirmation() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data.json");
    create(&data, "keep me", "work");

    tracker(&data)
        .arg("delete")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing deleted"));
    assert_eq!(stored(&data).len(), 1);

    tracker(&data)
        .args(["delete", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 task(s) were deleted successfully."));
    assert!(stored(&data).is_empty());
}

#[test]
fn test_corrupt_file_degrades_to_empty() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data.json");
    std::fs::write(&data, "invalid-json").unwrap();

    tracker(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."))
        .stderr(predicate::str::contains("Could not load tasks"));
}

#[test]
fn test_table_output() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data.json");
    create(&data, "tabled", "work");

    tracker(&data)
        .args(["--table", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Priority"))
        .stdout(predicate::str::contains("Tabled"))
        .stdout(predicate::str::contains("1 task(s) total"));
}

#[test]
fn test_config_round_trip() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("tracker")
        .unwrap()
        .env("NO_COLOR", "1")
        .args(["--project"])
        .arg(temp.path())
        .args(["config", "--tasks-file", "todo.json", "--output", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tasks file set to todo.json"));

    let config = std::fs::read_to_string(temp.path().join(".tracker/config.json")).unwrap();
    assert!(config.contains("\"tasksFile\": \"todo.json\""));
    assert!(config.contains("\"output\": \"table\""));
}
