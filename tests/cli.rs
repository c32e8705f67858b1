//! Integration tests for top-level CLI behavior.

use std::process::Command;

fn run_seqname(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_seqname");
    Command::new(bin)
        .args(args)
        .env_remove("SEQNAME_CONFIG")
        .output()
        .expect("failed to run seqname binary")
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout).lines().map(String::from).collect()
}

fn write_config(dir: &tempfile::TempDir, yaml: &str) -> String {
    let path = dir.path().join("names.yaml");
    std::fs::write(&path, yaml).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn next_prints_first_default_name() {
    let output = run_seqname(&["next"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["001"]);
}

#[test]
fn next_with_count_prints_sequence() {
    let output = run_seqname(&["next", "--count", "3", "--digits", "5"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["00001", "00002", "00003"]);
}

#[test]
fn next_uses_group_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "page:\n  digits: 5\n  prefix: Page-\n");

    let output = run_seqname(&["next", "page", "-n", "2", "--config", &config]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["Page-00001", "Page-00002"]);
}

#[test]
fn next_with_contexts_and_id_fields() {
    let output = run_seqname(&[
        "next",
        "--id-field",
        "_id",
        "--id-field",
        "name",
        "--context",
        r#"{"_id":"my-id"}"#,
        "--context",
        r#"{"foo":"bar"}"#,
    ]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["my-id", "001"]);
}

#[test]
fn groups_lists_effective_options() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "prefix: n-\npage:\n  auto: 500\n");

    let output = run_seqname(&["groups", "--config", &config]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        ["default\tdigits=3\tprefix=\"n-\"", "page\tdigits=3\tprefix=\"n-\""]
    );
}

#[test]
fn config_from_environment_variable() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "{\"digits\": 2}");

    let bin = env!("CARGO_BIN_EXE_seqname");
    let output = Command::new(bin).arg("next").env("SEQNAME_CONFIG", &config).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["01"]);
}

#[test]
fn wrongly_typed_config_fields_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "digits: five\npage:\n  prefix: 7\n  digits: 5\n");

    let output = run_seqname(&["next", "page", "--config", &config]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["00001"]);

    let output = run_seqname(&["next", "--config", &config]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["001"]);
}

#[test]
fn unparseable_config_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "page: {digits: 5");

    let output = run_seqname(&["next", "--config", &config]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("invalid generator config"));
}

#[test]
fn oversized_digits_are_clamped() {
    let output = run_seqname(&["next", "--digits", "1000000000000"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 256);
    assert!(lines[0].ends_with("001"));
}

#[test]
fn missing_config_exits_with_error() {
    let output = run_seqname(&["next", "--config", "/nonexistent/seqname.yaml"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("failed to read config file"));
}

#[test]
fn invalid_context_exits_with_error() {
    let output = run_seqname(&["next", "--context", "nope"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("invalid context"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_seqname(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
