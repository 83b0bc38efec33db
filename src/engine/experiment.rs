// Experiment - 依存性注入による実験ランナー
// 生成ポリシー毎のエントリポイントを提供し、K回の繰り返し・集約・不変条件チェックを管理する

use super::aggregator::{display_timings, MedianSet};
use super::invariant::check_invariant;
use super::sampler::{run_timings, TimingSamples};
use super::sweep::ExecutionMode;
use crate::core::{
    BenchResult, BenchmarkConfig, BenchmarkReporter, Checksums, DispatchMechanism,
    GenerationPolicy, RunSettings, ShapeFactory, Verdict,
};
use crate::services::{validate_config, NoOpBenchmarkReporter};
use crate::workload::{EntropySource, WorkloadGenerator};
use tracing::{error, info};

/// 1回の実験の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentOutcome {
    pub policy: GenerationPolicy,
    pub settings: RunSettings,
    pub verdict: Verdict,
    pub checksums: Checksums,
}

/// 2つのディスパッチ機構を比較する実験
///
/// 全ての依存関係をコンストラクタで注入する。
/// 機構Aはビジター、機構Bはパターンマッチとして報告される。
pub struct Experiment<F, A, B, C, R> {
    factory: F,
    visitor: A,
    matcher: B,
    config: C,
    reporter: R,
}

impl<F, A, B, C, R> Experiment<F, A, B, C, R>
where
    F: ShapeFactory,
    A: DispatchMechanism,
    B: DispatchMechanism,
    C: BenchmarkConfig,
    R: BenchmarkReporter,
{
    pub fn new(factory: F, visitor: A, matcher: B, config: C, reporter: R) -> Self {
        Self {
            factory,
            visitor,
            matcher,
            config,
            reporter,
        }
    }

    /// 逐次ポリシーで実験
    pub fn test_sequential(&self) -> BenchResult<Verdict> {
        self.run(GenerationPolicy::Sequential).map(|outcome| outcome.verdict)
    }

    /// ランダム化ポリシーで実験
    pub fn test_randomized(&self) -> BenchResult<Verdict> {
        self.run(GenerationPolicy::Randomized).map(|outcome| outcome.verdict)
    }

    /// 繰り返しポリシーで実験
    pub fn test_repetitive(&self) -> BenchResult<Verdict> {
        self.run(GenerationPolicy::Repetitive).map(|outcome| outcome.verdict)
    }

    /// 全ポリシーを順に実験。最初の失敗で中断する
    pub fn run_all(&self) -> BenchResult<Vec<ExperimentOutcome>> {
        GenerationPolicy::ALL
            .iter()
            .map(|&policy| self.run(policy))
            .collect()
    }

    /// 指定ポリシーで実験を実行
    ///
    /// 逐次・ランダム化ポリシーでは集合を一度だけ構築し、繰り返しポリシーでは
    /// 繰り返し毎に解放して再構築する。不変条件違反の場合も、全ハンドルを
    /// 解放してからエラーを返す。
    pub fn run(&self, policy: GenerationPolicy) -> BenchResult<ExperimentOutcome> {
        validate_config(&self.config)?;

        let settings = RunSettings {
            object_count: self.config.object_count(),
            measurements: self.config.measurements(),
            repetitions: self.config.repetitions(),
            worker_threads: self.config.worker_threads(),
        };
        let verbose = self.config.enable_progress_reporting();
        let mode = ExecutionMode::new(settings.object_count, settings.worker_threads);
        let visitor_label = format!("Area{}{}", self.visitor.name(), policy.suffix());
        let matcher_label = format!("Area{}{}", self.matcher.name(), policy.suffix());

        info!(%policy, ?settings, "実験を開始します");
        self.reporter.report_started(policy, &settings);

        let mut generator = WorkloadGenerator::new(
            &self.factory,
            EntropySource::from_seed(self.config.random_seed()),
        );
        let mut samples = TimingSamples::new(settings.measurements);
        let mut medians = MedianSet::with_capacity(settings.repetitions);
        let mut checksums = Checksums::new();
        let mut iterations = 0;
        let mut first_divergence = None;

        // 進捗報告が無効なら繰り返し毎のサマリーは捨てる
        let silent = NoOpBenchmarkReporter::new();
        let progress: &dyn BenchmarkReporter = if verbose { &self.reporter } else { &silent };

        let shared = if policy.rebuilds_per_repetition() {
            None
        } else {
            Some(generator.generate(policy, settings.object_count, 0)?)
        };

        for repetition in 0..settings.repetitions {
            let rebuilt;
            let shapes = match &shared {
                Some(collection) => collection,
                None => {
                    rebuilt = generator.generate(policy, settings.object_count, repetition)?;
                    &rebuilt
                }
            };

            iterations = run_timings(
                shapes.as_slice(),
                &mode,
                &self.visitor,
                &self.matcher,
                &mut samples,
                &mut checksums,
            )?;
            if first_divergence.is_none() {
                first_divergence = samples
                    .first_divergence
                    .map(|measurement| (repetition, measurement));
            }

            let visitor_median =
                display_timings(progress, &visitor_label, &samples.visitor, iterations)?;
            let matcher_median =
                display_timings(progress, &matcher_label, &samples.matcher, iterations)?;
            medians.push(visitor_median, matcher_median);

            let verdict = Verdict::new(iterations, visitor_median, matcher_median);
            progress.report_repetition(repetition, &verdict, &checksums);
        }

        // 不変条件チェックの前に全ハンドルを解放する
        drop(shared);

        if let Err(violation) = check_invariant(&checksums) {
            error!(
                visitor = checksums.visitor,
                matcher = checksums.matcher,
                first_divergence = ?first_divergence,
                "両機構のチェックサムが一致しません"
            );
            self.reporter.report_invariant_violation(&checksums);
            return Err(violation);
        }

        let verdict = medians.final_verdict(iterations)?;
        info!(%policy, %verdict, "実験が完了しました");
        self.reporter.report_completed(policy, &verdict);

        Ok(ExperimentOutcome {
            policy,
            settings,
            verdict,
            checksums,
        })
    }

    /// ファクトリーへの参照を取得
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// 設定への参照を取得
    pub fn config(&self) -> &C {
        &self.config
    }

    /// レポーターへの参照を取得
    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
