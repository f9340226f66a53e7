//! End-to-end checks that settings files and `READSCORE_*` variables reach
//! the scoring run.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SAMPLE: &str = "The cat sat. It was happy!";

#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// A repository root holding `text.txt`, so discovery stays inside it.
fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join(".git")).unwrap();
    fs::write(tmp.path().join("text.txt"), SAMPLE).unwrap();
    tmp
}

fn in_dir(dir: &Path) -> Command {
    let mut cmd = cmd();
    cmd.env_remove("READSCORE_SCORE")
        .args(["-C", dir.to_str().unwrap()]);
    cmd
}

fn info_json(dir: &Path) -> Value {
    let output = in_dir(dir).args(["info", "--json"]).output().unwrap();
    assert!(
        output.status.success(),
        "info failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn env_beats_explicit_file_beats_project_file() {
    let tmp = project();
    fs::write(tmp.path().join(".readscore.toml"), "score = \"FK\"\n").unwrap();
    fs::write(tmp.path().join("ci.yaml"), "score: CL\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["score"], "FK");

    in_dir(tmp.path())
        .args(["--config", "ci.yaml", "text.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coleman–Liau index:"));

    in_dir(tmp.path())
        .env("READSCORE_SCORE", "SMOG")
        .args(["--config", "ci.yaml", "text.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Simple Measure of Gobbledygook:"))
        .stdout(predicate::str::contains("Coleman–Liau index:").not());
}

#[test]
fn configured_score_is_reported_by_info() {
    let tmp = project();
    fs::write(tmp.path().join(".readscore.toml"), "score = \"FK\"\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["score"], "FK");
    assert_eq!(json["config"]["echo_text"], true);
    assert!(json["config"]["config_file"].as_str().is_some());
}

#[test]
fn configured_score_skips_the_prompt() {
    let tmp = project();
    fs::write(
        tmp.path().join("readscore.yaml"),
        "score: CL\necho_text: false\n",
    )
    .unwrap();

    in_dir(tmp.path())
        .arg("text.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coleman–Liau index:"))
        .stdout(predicate::str::contains("Enter the score").not())
        .stdout(predicate::str::contains("The text is:").not());
}

#[test]
fn flag_overrides_configured_score() {
    let tmp = project();
    fs::write(tmp.path().join(".readscore.toml"), "score = \"CL\"\n").unwrap();

    in_dir(tmp.path())
        .args(["text.txt", "--score", "ARI"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Automated Readability Index:"))
        .stdout(predicate::str::contains("Coleman–Liau index:").not());
}

#[test]
fn unknown_configured_score_prints_invalid_score() {
    let tmp = project();
    fs::write(tmp.path().join(".readscore.toml"), "score = \"fog\"\n").unwrap();

    in_dir(tmp.path())
        .arg("text.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid score"))
        .stdout(predicate::str::contains("year olds").not());
}

#[test]
fn unknown_score_from_env_prints_invalid_score() {
    let tmp = project();

    in_dir(tmp.path())
        .env("READSCORE_SCORE", "bogus")
        .arg("text.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid score"));
}

#[test]
fn mistyped_setting_fails_to_load() {
    let tmp = project();
    fs::write(tmp.path().join(".readscore.toml"), "echo_text = \"maybe\"\n").unwrap();

    in_dir(tmp.path())
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn input_limit_from_config_rejects_large_file() {
    let tmp = project();
    fs::write(tmp.path().join(".readscore.toml"), "max_input_bytes = 8\n").unwrap();

    in_dir(tmp.path())
        .args(["text.txt", "--score", "ARI"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn disabled_input_limit_accepts_large_file() {
    let tmp = project();
    fs::write(
        tmp.path().join(".readscore.toml"),
        "max_input_bytes = 8\ndisable_input_limit = true\n",
    )
    .unwrap();

    in_dir(tmp.path())
        .args(["text.txt", "--score", "ARI"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Automated Readability Index: -3.44"));
}
