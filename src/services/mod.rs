// サービス層 - 設定と計測結果報告の具象実装
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod monitoring;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::{
    validate_config, DefaultBenchmarkConfig, DEFAULT_MEASUREMENTS, DEFAULT_OBJECT_COUNT,
    DEFAULT_REPETITIONS, MAX_WORKER_THREADS,
};
pub use monitoring::{ConsoleBenchmarkReporter, NoOpBenchmarkReporter};
