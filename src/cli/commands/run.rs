use crate::benchmarks::ExperimentReport;
use crate::cli::PolicySelection;
use crate::core::BenchResult;
use crate::engine::{Experiment, ExperimentOutcome};
use crate::factories::{ReporterFactory, SeededShapeFactory};
use crate::services::DefaultBenchmarkConfig;
use crate::shapes::{MatchDispatch, VisitorDispatch};
use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// runコマンドの引数をまとめた構造体
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub objects: Option<usize>,
    pub measurements: Option<usize>,
    pub repetitions: Option<usize>,
    pub threads: Option<usize>,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

/// 設定ファイル（またはデフォルト）にコマンドライン引数を上書きして設定を作る
pub fn build_config(options: &RunOptions) -> BenchResult<DefaultBenchmarkConfig> {
    let mut config = match &options.config {
        Some(path) => DefaultBenchmarkConfig::from_json_file(path)?,
        None => DefaultBenchmarkConfig::default(),
    };

    if let Some(objects) = options.objects {
        config = config.with_object_count(objects);
    }
    if let Some(measurements) = options.measurements {
        config = config.with_measurements(measurements);
    }
    if let Some(repetitions) = options.repetitions {
        config = config.with_repetitions(repetitions);
    }
    if let Some(threads) = options.threads {
        config = config.with_worker_threads(threads);
    }
    if options.seed.is_some() {
        config = config.with_random_seed(options.seed);
    }
    if options.quiet {
        config = config.with_progress_reporting(false);
    }

    config.validate()?;
    Ok(config)
}

/// 実験を実行し、指定があればJSONレポートを出力
pub fn execute_run(selection: PolicySelection, options: RunOptions) -> Result<Vec<ExperimentOutcome>> {
    let config = build_config(&options)?;
    let reporter = ReporterFactory::new().create(if options.quiet { "quiet" } else { "console" })?;

    let experiment = Experiment::new(
        SeededShapeFactory::new(),
        VisitorDispatch::new(),
        MatchDispatch::new(),
        config,
        reporter,
    );

    let mut outcomes = Vec::new();
    for policy in selection.policies() {
        outcomes.push(experiment.run(policy)?);
    }
    info!(experiments = outcomes.len(), "全ての実験が完了しました");

    if let Some(output) = &options.output {
        ExperimentReport::new(&outcomes).export_json_report(output)?;
    }

    Ok(outcomes)
}
