//! Integration tests for the `tk` CLI.
//!
//! Each test creates a temp data directory, runs `tk` as a subprocess, and
//! verifies stdout and/or file contents.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Get the path to the built `tk` binary.
fn tk_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("tk");
    path
}

fn tk(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(tk_bin())
        .arg("-C")
        .arg(dir.path())
        .args(args)
        .output()
        .expect("failed to run tk")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "tk failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// First task id as reported by `list --json`.
fn first_id(dir: &TempDir) -> i64 {
    let out = stdout(&tk(dir, &["list", "--json"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    value["tasks"][0]["id"].as_i64().unwrap()
}

fn list_texts(dir: &TempDir) -> Vec<String> {
    let out = stdout(&tk(dir, &["list", "--json"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    value["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["text"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn add_prints_id_and_list_shows_task() {
    let dir = TempDir::new().unwrap();
    let out = stdout(&tk(&dir, &["add", "Buy milk", "--category", "personal"]));
    let id: i64 = out.trim().parse().expect("add should print the new id");
    assert!(id > 0);

    let listed = stdout(&tk(&dir, &["list"]));
    assert_eq!(listed, "  1  [ ] Buy milk  #personal\n");
}

#[test]
fn add_writes_the_wire_format() {
    let dir = TempDir::new().unwrap();
    stdout(&tk(&dir, &["add", "Fix bug", "--category", "work"]));

    let raw = fs::read_to_string(dir.path().join("todos.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let task = &value.as_array().unwrap()[0];
    assert!(task["id"].is_i64());
    assert_eq!(task["text"], "Fix bug");
    assert_eq!(task["completed"], false);
    assert_eq!(task["category"], "work");
    assert!(task["createdAt"].as_str().unwrap().contains('T'));
}

#[test]
fn add_empty_text_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let out = stdout(&tk(&dir, &["add", "   "]));
    assert_eq!(out.trim(), "nothing added (empty text)");
    assert!(!dir.path().join("todos.json").exists());
}

#[test]
fn add_unknown_category_is_an_error() {
    let dir = TempDir::new().unwrap();
    let output = tk(&dir, &["add", "x", "--category", "chores"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown category"));
}

#[test]
fn toggle_flips_and_flips_back() {
    let dir = TempDir::new().unwrap();
    stdout(&tk(&dir, &["add", "Flip me"]));
    let id = first_id(&dir);

    let out = stdout(&tk(&dir, &["toggle", &id.to_string()]));
    assert_eq!(out.trim(), format!("done {}", id));
    assert!(stdout(&tk(&dir, &["list"])).contains("[x] Flip me"));

    let out = stdout(&tk(&dir, &["toggle", &id.to_string()]));
    assert_eq!(out.trim(), format!("todo {}", id));
    assert!(stdout(&tk(&dir, &["list"])).contains("[ ] Flip me"));
}

#[test]
fn toggle_unknown_id_prints_notice_and_succeeds() {
    let dir = TempDir::new().unwrap();
    stdout(&tk(&dir, &["add", "Only task"]));
    let out = stdout(&tk(&dir, &["toggle", "999"]));
    assert_eq!(out.trim(), "no task with id 999");
}

#[test]
fn rm_removes_exactly_the_matching_task() {
    let dir = TempDir::new().unwrap();
    stdout(&tk(&dir, &["add", "first"]));
    stdout(&tk(&dir, &["add", "second"]));
    let id = first_id(&dir);

    let out = stdout(&tk(&dir, &["rm", &id.to_string()]));
    assert_eq!(out.trim(), format!("removed {}", id));
    assert_eq!(list_texts(&dir), vec!["second"]);

    // Idempotent when already gone
    let out = stdout(&tk(&dir, &["rm", &id.to_string()]));
    assert_eq!(out.trim(), format!("no task with id {}", id));
}

#[test]
fn mv_reorders_by_display_position() {
    let dir = TempDir::new().unwrap();
    for text in ["a", "b", "c"] {
        stdout(&tk(&dir, &["add", text]));
    }

    let out = stdout(&tk(&dir, &["mv", "1", "3"]));
    assert_eq!(out.trim(), "moved 1 -> 3");
    assert_eq!(list_texts(&dir), vec!["b", "c", "a"]);
}

#[test]
fn mv_out_of_range_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    stdout(&tk(&dir, &["add", "a"]));
    stdout(&tk(&dir, &["add", "b"]));

    for args in [["mv", "1", "9"], ["mv", "0", "1"], ["mv", "2", "2"]] {
        let out = stdout(&tk(&dir, &args));
        assert_eq!(out.trim(), "nothing moved");
    }
    assert_eq!(list_texts(&dir), vec!["a", "b"]);
}

#[test]
fn stats_report_completion_percentage() {
    let dir = TempDir::new().unwrap();
    assert_eq!(stdout(&tk(&dir, &["stats"])).trim(), "0 / 0 done (0%)");

    stdout(&tk(&dir, &["add", "Buy milk", "--category", "personal"]));
    stdout(&tk(&dir, &["add", "Fix bug", "--category", "work"]));
    assert_eq!(stdout(&tk(&dir, &["stats"])).trim(), "0 / 2 done (0%)");

    let id = first_id(&dir);
    stdout(&tk(&dir, &["toggle", &id.to_string()]));
    assert_eq!(stdout(&tk(&dir, &["stats"])).trim(), "1 / 2 done (50%)");
}

#[test]
fn theme_set_and_toggle_persist_the_flag() {
    let dir = TempDir::new().unwrap();
    assert_eq!(stdout(&tk(&dir, &["theme"])).trim(), "light");

    assert_eq!(stdout(&tk(&dir, &["theme", "dark"])).trim(), "dark");
    assert_eq!(
        fs::read_to_string(dir.path().join("darkMode.json")).unwrap(),
        "true"
    );

    assert_eq!(stdout(&tk(&dir, &["theme", "toggle"])).trim(), "light");
    assert_eq!(
        fs::read_to_string(dir.path().join("darkMode.json")).unwrap(),
        "false"
    );
}

#[test]
fn list_json_has_positions_and_wire_fields() {
    let dir = TempDir::new().unwrap();
    stdout(&tk(&dir, &["add", "one"]));
    stdout(&tk(&dir, &["add", "two", "--category", "urgent"]));

    let out = stdout(&tk(&dir, &["list", "--json"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let tasks = value["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["position"], 1);
    assert_eq!(tasks[1]["position"], 2);
    assert_eq!(tasks[1]["category"], "urgent");
    assert!(tasks[0]["createdAt"].is_string());
}

#[test]
fn state_survives_across_invocations() {
    let dir = TempDir::new().unwrap();
    stdout(&tk(&dir, &["add", "durable"]));
    let id = first_id(&dir);
    stdout(&tk(&dir, &["toggle", &id.to_string()]));

    // A fresh invocation sees the completed task
    let listed = stdout(&tk(&dir, &["list"]));
    assert_eq!(listed, "  1  [x] durable  #work\n");
}
