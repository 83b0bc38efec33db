// 計測結果報告の具象実装

use crate::core::{
    BenchmarkReporter, Checksums, GenerationPolicy, RunSettings, TimingSummary, Verdict,
};

/// コンソール出力による計測結果報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleBenchmarkReporter {
    quiet: bool,
}

impl ConsoleBenchmarkReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最終判定と不変条件違反のみを出力する
    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl BenchmarkReporter for ConsoleBenchmarkReporter {
    fn report_started(&self, policy: GenerationPolicy, settings: &RunSettings) {
        if !self.quiet {
            println!("=================== {} ===================", policy.title());
            println!(
                "🚀 N={} M={} K={} threads={}",
                settings.object_count,
                settings.measurements,
                settings.repetitions,
                settings.worker_threads
            );
        }
    }

    fn report_timings(&self, label: &str, summary: &TimingSummary) {
        if !self.quiet {
            println!(
                "{label:<12} median {:>12?} {:>10.2} ns/call ({} samples)",
                summary.median,
                summary.per_iteration_nanos(),
                summary.samples
            );
        }
    }

    fn report_repetition(&self, repetition: usize, verdict: &Verdict, checksums: &Checksums) {
        if !self.quiet {
            println!(
                "\t[{repetition}]\t{verdict}\t\t a1={:8x} a2={:8x}",
                checksums.visitor, checksums.matcher
            );
        }
    }

    fn report_invariant_violation(&self, checksums: &Checksums) {
        eprintln!(
            "❌ ERROR: Invariant {}=={} doesn't hold.",
            checksums.visitor, checksums.matcher
        );
    }

    fn report_completed(&self, policy: GenerationPolicy, verdict: &Verdict) {
        println!("✅ {policy}: {verdict}");
    }
}

/// 何もしない報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpBenchmarkReporter;

impl NoOpBenchmarkReporter {
    pub fn new() -> Self {
        Self
    }
}

impl BenchmarkReporter for NoOpBenchmarkReporter {
    fn report_started(&self, _policy: GenerationPolicy, _settings: &RunSettings) {
        // 何もしない
    }

    fn report_timings(&self, _label: &str, _summary: &TimingSummary) {
        // 何もしない
    }

    fn report_repetition(&self, _repetition: usize, _verdict: &Verdict, _checksums: &Checksums) {
        // 何もしない
    }

    fn report_invariant_violation(&self, _checksums: &Checksums) {
        // 何もしない
    }

    fn report_completed(&self, _policy: GenerationPolicy, _verdict: &Verdict) {
        // 何もしない
    }
}
