//! 実験結果のJSONレポート
//!
//! 判定はナノ秒単位で記録する

use crate::core::{BenchError, BenchResult, Checksums, GenerationPolicy, RunSettings, Winner};
use crate::engine::ExperimentOutcome;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// 1ポリシー分の結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyReport {
    pub policy: GenerationPolicy,
    pub settings: RunSettings,
    pub iterations: usize,
    pub visitor_median_nanos: u64,
    pub matcher_median_nanos: u64,
    pub visitor_per_call_nanos: f64,
    pub matcher_per_call_nanos: f64,
    /// 相対差（%）。ビジター側の中央値が0なら記録しない
    pub relative_percent: Option<f64>,
    pub winner: Winner,
    pub checksums: Checksums,
}

impl From<&ExperimentOutcome> for PolicyReport {
    fn from(outcome: &ExperimentOutcome) -> Self {
        let verdict = &outcome.verdict;
        let (visitor_per_call_nanos, matcher_per_call_nanos) = verdict.per_iteration_nanos();

        Self {
            policy: outcome.policy,
            settings: outcome.settings,
            iterations: verdict.iterations,
            visitor_median_nanos: saturating_nanos(verdict.visitor_median),
            matcher_median_nanos: saturating_nanos(verdict.matcher_median),
            visitor_per_call_nanos,
            matcher_per_call_nanos,
            relative_percent: verdict.relative_percent(),
            winner: verdict.winner(),
            checksums: outcome.checksums,
        }
    }
}

fn saturating_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

/// 実験全体のレポート
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub timestamp: String,
    pub results: Vec<PolicyReport>,
}

impl ExperimentReport {
    pub fn new(outcomes: &[ExperimentOutcome]) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            results: outcomes.iter().map(PolicyReport::from).collect(),
        }
    }

    pub fn to_json(&self) -> BenchResult<String> {
        serde_json::to_string_pretty(self)
            .context("レポートのシリアライズに失敗")
            .map_err(BenchError::report)
    }

    /// JSON形式でのレポート出力
    pub fn export_json_report(&self, path: &Path) -> BenchResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("レポートの書き込みに失敗: {}", path.display()))
            .map_err(BenchError::report)?;

        println!("📄 詳細レポートを出力しました: {}", path.display());
        Ok(())
    }
}
