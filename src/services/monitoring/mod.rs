// 計測結果報告サービス

pub mod implementations;

pub use implementations::{ConsoleBenchmarkReporter, NoOpBenchmarkReporter};
