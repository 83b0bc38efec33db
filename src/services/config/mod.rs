// ベンチマーク設定サービス

pub mod implementations;

pub use implementations::{
    validate_config, DefaultBenchmarkConfig, DEFAULT_MEASUREMENTS, DEFAULT_OBJECT_COUNT,
    DEFAULT_REPETITIONS, MAX_WORKER_THREADS,
};
