//! End-to-end tests for the `check` command.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a Command for the hp-core binary.
fn hp_core() -> Command {
    Command::cargo_bin("hp-core").expect("hp-core binary should exist")
}

fn fixture(list: &str, images: &[&str]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    for image in images {
        fs::write(dir.path().join(image), b"gif").unwrap();
    }
    let list_path = dir.path().join("fedi_hearts_list.txt");
    fs::write(&list_path, list).unwrap();
    (dir, list_path)
}

#[test]
fn clean_list_passes() {
    let (_dir, list) = fixture("a.gif\nb.gif | Bee\n", &["a.gif", "b.gif"]);

    hp_core()
        .args(["check", "--list"])
        .arg(&list)
        .assert()
        .success()
        .stdout(predicate::str::contains("no problems found"));
}

#[test]
fn missing_source_fails_without_touching_output() {
    let (dir, list) = fixture("a.gif\nmissing.gif\n", &["a.gif"]);

    hp_core()
        .args(["check", "--list"])
        .arg(&list)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("source file not found"));

    // check writes nothing: the fixture still holds only the list and image
    let entries = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 2);
}

#[test]
fn duplicate_output_names_reported() {
    let (_dir, list) = fixture(
        "Ace.gif\nace (remake).gif | ace\n",
        &["Ace.gif", "ace (remake).gif"],
    );

    hp_core()
        .args(["check", "--list"])
        .arg(&list)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("already produced by line 1"));
}

#[test]
fn json_format_emits_structured_report() {
    let (_dir, list) = fixture("missing.gif\n", &[]);

    let output = hp_core()
        .args(["check", "--format", "json", "--list"])
        .arg(&list)
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["entries"], serde_json::json!(1));
    assert_eq!(
        report["problems"][0]["kind"],
        serde_json::json!("missing_source")
    );
    assert_eq!(report["problems"][0]["line"], serde_json::json!(1));
}

#[test]
fn unreadable_list_is_a_user_error() {
    hp_core()
        .args(["check", "--list", "/nonexistent/fedi_hearts_list.txt"])
        .assert()
        .code(10)
        .stderr(predicate::str::contains("cannot read list file"));
}
