// ベンチマークハーネスのトレイト定義
// 外部コラボレーター（オブジェクト生成・ディスパッチ・報告・設定）の抽象化インターフェース

use super::types::{Checksums, GenerationPolicy, RunSettings, TimingSummary, Verdict};
use crate::shapes::Shape;
use mockall::automock;

/// シードからオブジェクトを生成するファクトリ
#[automock]
pub trait ShapeFactory: Send + Sync {
    /// シードから新しいオブジェクトを生成（所有権は呼び出し側へ移る）
    fn make_shape(&self, seed: usize) -> Box<dyn Shape>;
}

/// 比較対象となるディスパッチ機構
///
/// 実装は副作用を持ってはならない。同じ入力に対して両機構が
/// 同じ値を返すことがチェックサム不変条件の前提となる。
#[automock]
pub trait DispatchMechanism: Send + Sync {
    /// 計測ラベルに使う短い名前
    fn name(&self) -> &'static str;

    /// 1オブジェクトに対して操作をディスパッチし結果を返す
    fn dispatch(&self, shape: &dyn Shape, perturbation: usize) -> usize;
}

/// ベンチマーク設定を抽象化するトレイト
#[automock]
pub trait BenchmarkConfig: Send + Sync {
    /// オブジェクト集合のサイズ（N）
    fn object_count(&self) -> usize;

    /// 1繰り返しあたりの計測回数（M）
    fn measurements(&self) -> usize;

    /// 実験の繰り返し回数（K）
    fn repetitions(&self) -> usize;

    /// 追加ワーカースレッド数（T）。0の場合は完全に逐次実行
    fn worker_threads(&self) -> usize;

    /// ランダム化ポリシー用の固定シード。Noneなら時計から導出
    fn random_seed(&self) -> Option<u64>;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

impl BenchmarkConfig for Box<dyn BenchmarkConfig> {
    fn object_count(&self) -> usize {
        self.as_ref().object_count()
    }

    fn measurements(&self) -> usize {
        self.as_ref().measurements()
    }

    fn repetitions(&self) -> usize {
        self.as_ref().repetitions()
    }

    fn worker_threads(&self) -> usize {
        self.as_ref().worker_threads()
    }

    fn random_seed(&self) -> Option<u64> {
        self.as_ref().random_seed()
    }

    fn enable_progress_reporting(&self) -> bool {
        self.as_ref().enable_progress_reporting()
    }
}

/// 計測結果報告の抽象化トレイト
#[automock]
pub trait BenchmarkReporter: Send + Sync {
    /// 実験開始時の報告
    fn report_started(&self, policy: GenerationPolicy, settings: &RunSettings);

    /// 1繰り返し分の計測サマリーの報告
    fn report_timings(&self, label: &str, summary: &TimingSummary);

    /// 1繰り返し終了時の比較結果とチェックサムの報告
    fn report_repetition(&self, repetition: usize, verdict: &Verdict, checksums: &Checksums);

    /// 不変条件違反の報告
    fn report_invariant_violation(&self, checksums: &Checksums);

    /// 実験完了時の最終判定の報告
    fn report_completed(&self, policy: GenerationPolicy, verdict: &Verdict);
}

impl BenchmarkReporter for Box<dyn BenchmarkReporter> {
    fn report_started(&self, policy: GenerationPolicy, settings: &RunSettings) {
        self.as_ref().report_started(policy, settings)
    }

    fn report_timings(&self, label: &str, summary: &TimingSummary) {
        self.as_ref().report_timings(label, summary)
    }

    fn report_repetition(&self, repetition: usize, verdict: &Verdict, checksums: &Checksums) {
        self.as_ref().report_repetition(repetition, verdict, checksums)
    }

    fn report_invariant_violation(&self, checksums: &Checksums) {
        self.as_ref().report_invariant_violation(checksums)
    }

    fn report_completed(&self, policy: GenerationPolicy, verdict: &Verdict) {
        self.as_ref().report_completed(policy, verdict)
    }
}
