use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const WIDE: &str = "package p\n\nfunc wide(a, b, c, d, e, f int) int {\n\treturn a\n}\n";

const BRANCHY: &str = "package p

func branchy(a, b, c bool) {
\tif a {
\t} else if b {
\t\tprintln(b)
\t} else if c {
\t\tprintln(c)
\t} else {
\t\tprintln(a)
\t}
}
";

fn splint() -> Command {
    let mut cmd = Command::cargo_bin("splint").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, name: &str, src: &str) {
    fs::write(dir.join(name), src).unwrap();
}

fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "wide.go", WIDE);
    write(dir.path(), "branchy.go", BRANCHY);
    write(dir.path(), "wide_test.go", &WIDE.replace("wide(", "wideTest("));
    dir
}

#[test]
fn prints_warnings_and_totals() {
    let dir = project();
    splint()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("function wide has too many params: 6"))
        .stdout(predicate::str::contains("function branchy has an empty if body at 4:2"))
        .stdout(predicate::str::contains("function branchy has an if/else chain too long: 3"))
        .stdout(predicate::str::contains("Number of functions above param threshold: 2"))
        .stdout(predicate::str::contains("Number of if/else chains above threshold: 1"));
}

#[test]
fn json_summary() {
    let dir = project();
    let output = splint().arg("--json").arg(dir.path()).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["NumAboveParamThreshold"], 2);
    assert_eq!(json["NumEmptyIfBody"], 1);
    assert_eq!(json["NumAboveIfChainThreshold"], 1);
    assert_eq!(json["NumAboveStatementThreshold"], 0);
    assert_eq!(json["IfChain"][0]["Function"], "branchy");
}

#[test]
fn ignore_tests_flag_skips_test_files() {
    let dir = project();
    splint()
        .arg("-t")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("wideTest").not())
        .stdout(predicate::str::contains("Number of functions above param threshold: 1"));
}

#[test]
fn flags_override_thresholds() {
    let dir = project();
    splint()
        .args(["-p", "6", "-i", "3"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of functions above param threshold: 0"))
        .stdout(predicate::str::contains("Number of if/else chains above threshold: 0"));
}

#[test]
fn config_file_is_layered_under_flags() {
    let dir = project();
    let config = dir.path().join("splint.json");
    fs::write(&config, r#"{"param_threshold": 10, "if_chain_threshold": 0}"#).unwrap();

    let output = splint()
        .arg("--json")
        .arg("-c")
        .arg(&config)
        .args(["-i", "5"])
        .arg(dir.path().join("wide.go"))
        .arg(dir.path().join("branchy.go"))
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["NumAboveParamThreshold"], 0);
    assert_eq!(json["NumAboveIfChainThreshold"], 0);
}

#[test]
fn negative_threshold_is_rejected_before_analysis() {
    let dir = project();
    splint()
        .args(["--params", "-1"])
        .arg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("must not be negative"));
}

#[test]
fn broken_config_is_fatal() {
    let dir = project();
    let config = dir.path().join("bad.json");
    fs::write(&config, "{ not json").unwrap();
    splint()
        .arg("-c")
        .arg(&config)
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config JSON"));
}

#[test]
fn parse_errors_do_not_stop_the_run() {
    let dir = project();
    write(dir.path(), "a_broken.go", "package p\n\nfunc broken( {\n");
    splint()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("error parsing"))
        .stdout(predicate::str::contains("a_broken.go"))
        .stdout(predicate::str::contains("Number of functions above param threshold: 2"));
}

#[test]
fn prints_usage_without_paths() {
    splint()
        .args(["-p", "3"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage: splint"));
}

#[test]
fn continued_declarations_do_not_break_a_file() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "consts.go",
        "package p\n\nconst greeting = \"hello, \" +\n\t\"world\"\n\nfunc wide(a, b, c, d, e, f int) {}\n",
    );
    splint()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("error parsing").not())
        .stdout(predicate::str::contains("function wide has too many params: 6"));
}
