//! CLI tests for `loxbench count`, including the gen -> count pipeline.

use std::process::Command;

use loxbench::exit_codes;
use loxbench::test_support;

fn loxbench() -> Command {
    Command::new(env!("CARGO_BIN_EXE_loxbench"))
}

#[test]
fn count_prints_bare_token_count() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = test_support::write_corpus_fixture(temp.path(), 3);

    let output = loxbench().arg("count").arg(&path).output().expect("loxbench count");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout.trim(), "30");
}

#[test]
fn gen_then_count_tallies_the_canonical_corpus() {
    let temp = tempfile::tempdir().expect("tempdir");

    let status = loxbench()
        .current_dir(temp.path())
        .arg("gen")
        .status()
        .expect("loxbench gen");
    assert_eq!(status.code(), Some(exit_codes::OK));

    let output = loxbench()
        .current_dir(temp.path())
        .args(["count", "10_000_lines.lox"])
        .output()
        .expect("loxbench count");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout.trim(), "90003");
}

#[test]
fn count_json_reports_tokens_and_errors() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = test_support::write_corpus_fixture(temp.path(), 3);

    let output = loxbench()
        .arg("count")
        .arg(&path)
        .arg("--json")
        .output()
        .expect("loxbench count");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(report["tokens"], 30);
    assert_eq!(report["errors"].as_array().map(Vec::len), Some(0));
}

#[test]
fn count_dirty_file_exits_scan_errors() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = test_support::write_dirty_fixture(temp.path());

    let output = loxbench().arg("count").arg(&path).output().expect("loxbench count");

    assert_eq!(output.status.code(), Some(exit_codes::SCAN_ERRORS));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    // x, =, 1, y, = still tally; the stray @ is reported on stderr.
    assert_eq!(stdout.trim(), "5");
    assert!(stderr.contains("[line 2]"), "stderr: {stderr}");
    assert!(stderr.contains("Unexpected character"), "stderr: {stderr}");
}

#[test]
fn count_missing_file_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = loxbench()
        .current_dir(temp.path())
        .args(["count", "no_such_file.lox"])
        .output()
        .expect("loxbench count");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("read source"), "stderr: {stderr}");
}
