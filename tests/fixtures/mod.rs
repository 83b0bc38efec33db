// テストユーティリティとモック実装
// 統合テストで共有するヘルパー

pub mod mocks;

// 公開API
pub use mocks::*;

use dispatch_bench::DefaultBenchmarkConfig;

/// 統合テスト用の小さな設定（N=100, M=10, K=5）
pub fn small_config(worker_threads: usize) -> DefaultBenchmarkConfig {
    DefaultBenchmarkConfig::new(1)
        .with_object_count(100)
        .with_measurements(10)
        .with_repetitions(5)
        .with_worker_threads(worker_threads)
        .with_progress_reporting(false)
}
