//! CLI tests for the `cycles` binary.
//!
//! Spawns the binary in a temp directory and checks stdout and exit codes.

use std::path::Path;
use std::process::{Command, Output};

use cycles::exit_codes;
use cycles::test_support::config_in_tempdir;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cycles"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run cycles")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn for_prints_even_sum() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_in(temp.path(), &["for", "2", "20"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "110\n");
}

#[test]
fn while_prints_halving_count() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_in(temp.path(), &["while", "110"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "11\n");
}

#[test]
fn do_while_prints_replaced_text() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_in(temp.path(), &["do-while", "Мороз и солнце, день чудесный"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "Мо_оз_и _ол_це_ д_нь_чу_ес_ый\n");
}

#[test]
fn json_flag_prints_report_object() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_in(temp.path(), &["--json", "for", "1", "2"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(value["operation"], "for");
    assert_eq!(value["input"]["start"], 1);
    assert_eq!(value["output"], 2);
}

#[test]
fn local_config_changes_placeholder_and_stride() {
    let (temp, _path) = config_in_tempdir("placeholder = \"*\"\nstride = 2\n");
    let output = run_in(temp.path(), &["do-while", "abcdef"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "a*c*e*\n");
}

#[test]
fn config_command_prints_defaults() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_in(temp.path(), &["config"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let text = stdout(&output);
    assert!(text.contains("stride = 3"), "{text}");
    assert!(text.contains("placeholder = \"_\""), "{text}");
}

#[test]
fn config_command_prints_json_with_flag() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_in(temp.path(), &["config", "--json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(value["stride"], 3);
    assert_eq!(value["placeholder"], "_");
}

#[test]
fn for_with_huge_symmetric_range_prints_zero() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_in(temp.path(), &["for", "-7000000000", "7000000000"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "0\n");
}

#[test]
fn invalid_config_exits_with_invalid_code() {
    let (temp, _path) = config_in_tempdir("stride = 0\n");
    let output = run_in(temp.path(), &["do-while", "abc"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("stride must be > 0"), "{stderr}");
}

#[test]
fn infinite_dividend_exits_with_invalid_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_in(temp.path(), &["while", "inf"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn explicit_config_path_is_used() {
    let (temp, path) = config_in_tempdir("threshold = 1.0\ndivisor = 10.0\n");
    let elsewhere = tempfile::tempdir().expect("tempdir");
    let config_arg = path.to_str().expect("utf8 path");
    let output = run_in(elsewhere.path(), &["--config", config_arg, "while", "1000"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "4\n");
    drop(temp);
}
