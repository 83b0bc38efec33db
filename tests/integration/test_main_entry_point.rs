// main.rsとエントリーポイントのテスト
use std::process::{Command, Output};

fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dispatch_bench"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn test_cli_help() {
    let output = run_binary(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("run"));
    assert!(stdout.contains("show-config"));
}

#[test]
fn test_cli_run_succeeds() {
    let output = run_binary(&["run", "-n", "100", "-m", "3", "-r", "3", "-t", "3", "-q"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("sequential"));
    assert!(stdout.contains("repetitive"));
}

#[test]
fn test_cli_zero_objects_exits_with_validation_error() {
    let output = run_binary(&["run", "-n", "0", "-q"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("バリデーションエラー"));
    assert!(stderr.contains("object_count"));
}

#[test]
fn test_cli_excessive_threads_exits_with_validation_error() {
    let output = run_binary(&[
        "run",
        "-n",
        "10",
        "-m",
        "1",
        "-r",
        "1",
        "--threads",
        "18446744073709551615",
        "-q",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("worker_threads"));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn test_cli_show_config_prints_json() {
    let output = run_binary(&["show-config"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["object_count"], 10_000);
    assert!(json["worker_threads"].is_u64());
}
