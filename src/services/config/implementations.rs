// ベンチマーク設定の具象実装

use crate::core::{BenchError, BenchResult, BenchmarkConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// デフォルトのオブジェクト数（N）
pub const DEFAULT_OBJECT_COUNT: usize = 10_000;
/// デフォルトの計測回数（M）
pub const DEFAULT_MEASUREMENTS: usize = 101;
/// デフォルトの繰り返し回数（K）
pub const DEFAULT_REPETITIONS: usize = 101;
/// 追加ワーカースレッド数（T）の上限
pub const MAX_WORKER_THREADS: usize = 1024;

/// デフォルト設定実装
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultBenchmarkConfig {
    object_count: usize,
    measurements: usize,
    repetitions: usize,
    worker_threads: usize,
    random_seed: Option<u64>,
    enable_progress: bool,
}

impl DefaultBenchmarkConfig {
    /// CPU数からワーカースレッド数を決めて作成（調整スレッド分を1つ差し引く）
    pub fn new(cpu_count: usize) -> Self {
        Self {
            object_count: DEFAULT_OBJECT_COUNT,
            measurements: DEFAULT_MEASUREMENTS,
            repetitions: DEFAULT_REPETITIONS,
            worker_threads: cpu_count.saturating_sub(1),
            random_seed: None,
            enable_progress: true,
        }
    }

    /// 動作確認用の軽量設定
    pub fn quick() -> Self {
        Self::default()
            .with_object_count(1_000)
            .with_measurements(11)
            .with_repetitions(5)
    }

    /// ワーカースレッドを使わない逐次設定
    pub fn sequential() -> Self {
        Self::default().with_worker_threads(0)
    }

    pub fn with_object_count(mut self, object_count: usize) -> Self {
        self.object_count = object_count;
        self
    }

    pub fn with_measurements(mut self, measurements: usize) -> Self {
        self.measurements = measurements;
        self
    }

    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn with_worker_threads(mut self, worker_threads: usize) -> Self {
        self.worker_threads = worker_threads;
        self
    }

    pub fn with_random_seed(mut self, seed: Option<u64>) -> Self {
        self.random_seed = seed;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }

    /// 設定の妥当性をチェック
    pub fn validate(&self) -> BenchResult<()> {
        validate_config(self)
    }

    /// JSON文字列から設定を読み込む
    pub fn from_json(json: &str) -> BenchResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| BenchError::configuration(format!("設定JSONの解析に失敗しました: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// JSONファイルから設定を読み込む
    pub fn from_json_file(path: &Path) -> BenchResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            BenchError::configuration(format!(
                "設定ファイルを読み込めません: {} - {e}",
                path.display()
            ))
        })?;
        Self::from_json(&json)
    }

    /// 設定をJSONにシリアライズ
    pub fn to_json(&self) -> BenchResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| BenchError::internal(e.into()))
    }
}

impl Default for DefaultBenchmarkConfig {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

impl BenchmarkConfig for DefaultBenchmarkConfig {
    fn object_count(&self) -> usize {
        self.object_count
    }

    fn measurements(&self) -> usize {
        self.measurements
    }

    fn repetitions(&self) -> usize {
        self.repetitions
    }

    fn worker_threads(&self) -> usize {
        self.worker_threads
    }

    fn random_seed(&self) -> Option<u64> {
        self.random_seed
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}

/// 任意の設定実装に対する共通の妥当性チェック
pub fn validate_config<C: BenchmarkConfig + ?Sized>(config: &C) -> BenchResult<()> {
    if config.object_count() == 0 {
        return Err(BenchError::validation(
            "object_count",
            "オブジェクト数は1以上である必要があります",
        ));
    }
    if config.measurements() == 0 {
        return Err(BenchError::validation(
            "measurements",
            "計測回数は1以上である必要があります",
        ));
    }
    if config.repetitions() == 0 {
        return Err(BenchError::validation(
            "repetitions",
            "繰り返し回数は1以上である必要があります",
        ));
    }
    if config.worker_threads() > MAX_WORKER_THREADS {
        return Err(BenchError::validation(
            "worker_threads",
            format!(
                "ワーカースレッド数は{MAX_WORKER_THREADS}以下である必要があります: {}",
                config.worker_threads()
            ),
        ));
    }
    Ok(())
}
