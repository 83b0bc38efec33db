// 設定ファイルとJSONレポートの統合テスト
use dispatch_bench::cli::{build_config, execute_run, PolicySelection, RunOptions};
use dispatch_bench::{BenchError, BenchmarkConfig, DefaultBenchmarkConfig};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_file_round_trip_through_cli() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bench.json");
    let saved = DefaultBenchmarkConfig::quick()
        .with_worker_threads(2)
        .with_random_seed(Some(5));
    fs::write(&path, saved.to_json().unwrap()).unwrap();

    let options = RunOptions {
        config: Some(path),
        ..RunOptions::default()
    };
    let loaded = build_config(&options).unwrap();

    assert_eq!(loaded, saved);
    assert_eq!(loaded.random_seed(), Some(5));
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let options = RunOptions {
        config: Some(path),
        ..RunOptions::default()
    };
    assert!(matches!(
        build_config(&options),
        Err(BenchError::ConfigurationError { .. })
    ));
}

#[test]
fn test_run_writes_json_report() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("report.json");
    let options = RunOptions {
        objects: Some(50),
        measurements: Some(3),
        repetitions: Some(3),
        threads: Some(1),
        seed: Some(1),
        output: Some(output.clone()),
        quiet: true,
        ..RunOptions::default()
    };

    let outcomes = execute_run(PolicySelection::Sequential, options).unwrap();
    assert_eq!(outcomes.len(), 1);

    let report: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let results = report["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["policy"], "sequential");
    assert_eq!(results[0]["iterations"], 50);
    assert_eq!(
        results[0]["checksums"]["visitor"],
        results[0]["checksums"]["matcher"]
    );
}
