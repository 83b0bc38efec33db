//! ReporterFactory - 計測結果報告の Factory Pattern 実装

use crate::core::{BenchError, BenchResult, BenchmarkReporter};
use crate::services::{ConsoleBenchmarkReporter, NoOpBenchmarkReporter};

pub struct ReporterFactory;

impl ReporterFactory {
    pub fn new() -> Self {
        Self
    }

    /// 実装名から報告実装を作成
    pub fn create(&self, implementation: &str) -> BenchResult<Box<dyn BenchmarkReporter>> {
        match implementation {
            "console" => Ok(Box::new(ConsoleBenchmarkReporter::new())),
            "quiet" => Ok(Box::new(ConsoleBenchmarkReporter::quiet())),
            "noop" => Ok(Box::new(NoOpBenchmarkReporter::new())),
            _ => Err(BenchError::configuration(format!(
                "未サポートのReporter実装: {implementation}. 利用可能: {}",
                self.available_implementations().join(", ")
            ))),
        }
    }

    pub fn available_implementations(&self) -> Vec<&'static str> {
        vec!["console", "quiet", "noop"]
    }

    pub fn get_description(&self, implementation: &str) -> Option<&'static str> {
        match implementation {
            "console" => Some("コンソール出力による計測結果報告"),
            "quiet" => Some("最終判定のみを出力するコンソール報告"),
            "noop" => Some("何もしない報告 (テスト・ベンチマーク用)"),
            _ => None,
        }
    }
}

impl Default for ReporterFactory {
    fn default() -> Self {
        Self::new()
    }
}
