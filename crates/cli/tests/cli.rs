// ABOUTME: Integration tests for the move-sidebar CLI binary.
// ABOUTME: Tests dry-run, execute, backups, directory mode, confirmation, invalid paths, and JSON output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PAGE: &str = r#"<html><body><div id="sidebar"><aside id="meta-2">m</aside><aside id="text-1">t</aside></div><div id="content">C</div><script id="jetpack-foo">x</script></body></html>"#;
const NO_SIDEBAR: &str = r#"<html><body><div id="content">C</div></body></html>"#;

fn move_sidebar() -> Command {
    Command::cargo_bin("move-sidebar").unwrap()
}

fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn dry_run_is_default() {
    let temp_dir = TempDir::new().unwrap();
    let page = write(temp_dir.path(), "page.html", PAGE);

    move_sidebar()
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode: DRY-RUN"))
        .stdout(predicate::str::contains(
            "Would modify file (would remove 1 unwanted asides, would remove 1 unwanted scripts) (dry-run)",
        ))
        .stdout(predicate::str::contains("All 1 files processed successfully!"));

    assert_eq!(fs::read_to_string(&page).unwrap(), PAGE);
}

#[test]
fn execute_modifies_file() {
    let temp_dir = TempDir::new().unwrap();
    let page = write(temp_dir.path(), "page.html", PAGE);

    move_sidebar()
        .arg(&page)
        .arg("--execute")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode: EXECUTE"))
        .stdout(predicate::str::contains(
            "Successfully modified, removed 1 unwanted asides, removed 1 unwanted scripts",
        ));

    let written = fs::read_to_string(&page).unwrap();
    assert!(written.contains(
        r#"<div id="content">C</div><div id="sidebar"><aside id="text-1">t</aside></div>"#
    ));
    assert!(!written.contains("jetpack-foo"));
    assert!(!temp_dir.path().join("page.html.bak").exists());
}

#[test]
fn backup_flag_writes_original_copy() {
    let temp_dir = TempDir::new().unwrap();
    let page = write(temp_dir.path(), "page.html", PAGE);

    move_sidebar()
        .arg(&page)
        .arg("-e")
        .arg("-b")
        .assert()
        .success()
        .stdout(predicate::str::contains("(backup created)"));

    let backup = temp_dir.path().join("page.html.bak");
    assert_eq!(fs::read_to_string(backup).unwrap(), PAGE);
}

#[test]
fn second_run_needs_no_changes() {
    let temp_dir = TempDir::new().unwrap();
    let page = write(temp_dir.path(), "page.html", PAGE);

    move_sidebar().arg(&page).arg("-e").assert().success();
    let first = fs::read_to_string(&page).unwrap();

    move_sidebar()
        .arg(&page)
        .arg("-e")
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes needed"));
    assert_eq!(fs::read_to_string(&page).unwrap(), first);
}

#[test]
fn missing_sidebar_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let page = write(temp_dir.path(), "page.html", NO_SIDEBAR);

    move_sidebar()
        .arg(&page)
        .arg("--execute")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Skip: section with id 'sidebar' not found in HTML",
        ))
        .stdout(predicate::str::contains(
            "0/1 files processed successfully, 1 failed/skipped",
        ));

    assert_eq!(fs::read_to_string(&page).unwrap(), NO_SIDEBAR);
}

#[test]
fn non_html_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let notes = write(temp_dir.path(), "notes.txt", PAGE);

    move_sidebar()
        .arg(&notes)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("is not an HTML file"));
}

#[test]
fn uppercase_extension_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let page = write(temp_dir.path(), "PAGE.HTML", PAGE);

    move_sidebar().arg(&page).assert().success();
}

#[test]
fn directory_flag_requires_directory() {
    let temp_dir = TempDir::new().unwrap();
    let page = write(temp_dir.path(), "page.html", PAGE);

    move_sidebar()
        .arg("--directory")
        .arg(&page)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn missing_path_fails() {
    let temp_dir = TempDir::new().unwrap();

    move_sidebar()
        .arg(temp_dir.path().join("nope.html"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn empty_directory_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "readme.txt", "hi");

    move_sidebar()
        .arg("-d")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No .html files found"));
}

#[test]
fn directory_mode_recurses() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.html", PAGE);
    write(temp_dir.path(), "blog/b.html", PAGE);
    write(temp_dir.path(), "blog/c.html", NO_SIDEBAR);

    move_sidebar()
        .arg("-d")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 HTML files"))
        .stdout(predicate::str::contains(
            "2/3 files processed successfully, 1 failed/skipped",
        ))
        .stderr(predicate::str::contains("[3/3] Processing c.html"));
}

#[test]
fn declined_confirmation_touches_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let a = write(temp_dir.path(), "a.html", PAGE);
    let b = write(temp_dir.path(), "b.html", PAGE);

    move_sidebar()
        .arg("-d")
        .arg(temp_dir.path())
        .arg("--execute")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."))
        .stderr(predicate::str::contains("Process 2 files? [y/n]"));

    assert_eq!(fs::read_to_string(a).unwrap(), PAGE);
    assert_eq!(fs::read_to_string(b).unwrap(), PAGE);
}

#[test]
fn accepted_confirmation_processes_files() {
    let temp_dir = TempDir::new().unwrap();
    let a = write(temp_dir.path(), "a.html", PAGE);
    write(temp_dir.path(), "b.html", PAGE);

    move_sidebar()
        .arg("-d")
        .arg(temp_dir.path())
        .arg("--execute")
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All 2 files processed successfully!"));

    assert_ne!(fs::read_to_string(a).unwrap(), PAGE);
}

#[test]
fn no_confirm_skips_prompt() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.html", PAGE);
    write(temp_dir.path(), "b.html", PAGE);

    move_sidebar()
        .arg("-d")
        .arg(temp_dir.path())
        .arg("--execute")
        .arg("--no-confirm")
        .assert()
        .success()
        .stderr(predicate::str::contains("[y/n]").not())
        .stdout(predicate::str::contains("All 2 files processed successfully!"));
}

#[test]
fn json_output_is_parseable() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.html", PAGE);
    write(temp_dir.path(), "b.html", NO_SIDEBAR);

    let output = move_sidebar()
        .arg("-d")
        .arg(temp_dir.path())
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["mode"], "DRY-RUN");
    assert_eq!(value["total"], 2);
    assert_eq!(value["succeeded"], 1);
    assert_eq!(value["skipped"], 1);
    assert_eq!(value["removed"]["scripts"], 1);
    assert_eq!(value["files"][0]["status"], "would_modify");
    assert_eq!(value["files"][0]["counts"]["unwanted_asides"], 1);
    assert_eq!(value["files"][1]["status"], "skipped");
}
