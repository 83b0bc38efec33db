// dispatch_bench - ビジターとパターンマッチのディスパッチ比較ベンチマーク
//
// レイヤー構成:
//   core      トレイト・型・エラー
//   shapes    オブジェクト階層と2つのディスパッチ機構
//   workload  生成ポリシーに従ったオブジェクト集合の生成
//   engine    分割・スイープ・計測・集約・不変条件チェック
//   services  設定と報告の具象実装
//   factories 依存関係の組み立て
//   cli       コマンドライン
//   benchmarks JSONレポート

pub mod benchmarks;
pub mod cli;
pub mod core;
pub mod engine;
pub mod factories;
pub mod services;
pub mod shapes;
pub mod workload;

pub use crate::core::{
    BenchError, BenchResult, BenchmarkConfig, BenchmarkReporter, Checksums, DispatchMechanism,
    GenerationPolicy, ShapeFactory, Verdict,
};
pub use engine::{Experiment, ExperimentOutcome};
pub use factories::SeededShapeFactory;
pub use services::{ConsoleBenchmarkReporter, DefaultBenchmarkConfig, NoOpBenchmarkReporter};
pub use shapes::{MatchDispatch, Shape, VisitorDispatch};

/// デフォルト構成（シード付き形状・両機構・コンソール報告）の実験を作成
pub fn create_default_experiment(
    config: DefaultBenchmarkConfig,
) -> Experiment<
    SeededShapeFactory,
    VisitorDispatch,
    MatchDispatch,
    DefaultBenchmarkConfig,
    ConsoleBenchmarkReporter,
> {
    Experiment::new(
        SeededShapeFactory::new(),
        VisitorDispatch::new(),
        MatchDispatch::new(),
        config,
        ConsoleBenchmarkReporter::new(),
    )
}

/// 報告を出力しない実験を作成（テスト・ベンチマーク用）
pub fn create_quiet_experiment(
    config: DefaultBenchmarkConfig,
) -> Experiment<
    SeededShapeFactory,
    VisitorDispatch,
    MatchDispatch,
    DefaultBenchmarkConfig,
    NoOpBenchmarkReporter,
> {
    Experiment::new(
        SeededShapeFactory::new(),
        VisitorDispatch::new(),
        MatchDispatch::new(),
        config,
        NoOpBenchmarkReporter::new(),
    )
}
