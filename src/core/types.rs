// ベンチマークで使用する基本データ型定義

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// オブジェクト集合の生成ポリシー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPolicy {
    /// i番目のオブジェクトをシードiから生成
    Sequential,
    /// 疑似乱数シードから生成
    Randomized,
    /// 繰り返し毎に集合を再構築
    Repetitive,
}

impl GenerationPolicy {
    /// 全ポリシー（実行順）
    pub const ALL: [GenerationPolicy; 3] = [
        GenerationPolicy::Sequential,
        GenerationPolicy::Randomized,
        GenerationPolicy::Repetitive,
    ];

    /// 計測ラベルの接尾辞
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Sequential => "Seq",
            Self::Randomized => "Rnd",
            Self::Repetitive => "Rep",
        }
    }

    /// 見出し用の名前
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Sequential => "Sequential Test",
            Self::Randomized => "Randomized Test",
            Self::Repetitive => "Repetitive Test",
        }
    }

    /// 集合を繰り返し毎に再構築するかどうか
    pub const fn rebuilds_per_repetition(&self) -> bool {
        matches!(self, Self::Repetitive)
    }
}

impl fmt::Display for GenerationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sequential => "sequential",
            Self::Randomized => "randomized",
            Self::Repetitive => "repetitive",
        };
        f.write_str(name)
    }
}

/// 1回の実験で確定した実行パラメータ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSettings {
    /// オブジェクト数（N）
    pub object_count: usize,
    /// 計測回数（M）
    pub measurements: usize,
    /// 繰り返し回数（K）
    pub repetitions: usize,
    /// 追加ワーカースレッド数（T）
    pub worker_threads: usize,
}

/// 1繰り返し分の計測サマリー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSummary {
    /// 計測値の中央値
    pub median: Duration,
    /// 計測値の個数
    pub samples: usize,
    /// 1計測あたりの反復回数
    pub iterations: usize,
}

impl TimingSummary {
    /// 1反復あたりの時間（ナノ秒）
    pub fn per_iteration_nanos(&self) -> f64 {
        self.median.as_nanos() as f64 / self.iterations.max(1) as f64
    }
}

/// 2つのディスパッチ機構の累積チェックサム
///
/// 実験全体を通して加算され、スイープ間でリセットされない。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checksums {
    /// 機構A（ビジター）の累積値
    pub visitor: usize,
    /// 機構B（パターンマッチ）の累積値
    pub matcher: usize,
}

impl Checksums {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1スイープ分の結果を加算（size_tと同様にラップアラウンド）
    pub fn add(&mut self, visitor: usize, matcher: usize) {
        self.visitor = self.visitor.wrapping_add(visitor);
        self.matcher = self.matcher.wrapping_add(matcher);
    }

    /// 両機構の結果が一致しているか
    pub fn is_consistent(&self) -> bool {
        self.visitor == self.matcher
    }
}

/// 計測で優位だった機構
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Visitor,
    Matcher,
    Tie,
}

/// 1回の実験（または1繰り返し）の比較結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// 1計測あたりの反復回数（オブジェクト数）
    pub iterations: usize,
    /// 機構Aの中央値
    pub visitor_median: Duration,
    /// 機構Bの中央値
    pub matcher_median: Duration,
}

impl Verdict {
    pub fn new(iterations: usize, visitor_median: Duration, matcher_median: Duration) -> Self {
        Self {
            iterations,
            visitor_median,
            matcher_median,
        }
    }

    /// 機構Aに対する機構Bの相対差（%）。正の値はマッチングが遅いことを示す
    ///
    /// 機構Aの中央値が0の場合は比較不能としてNoneを返す
    pub fn relative_percent(&self) -> Option<f64> {
        let visitor = self.visitor_median.as_secs_f64();
        if visitor == 0.0 {
            return None;
        }
        let matcher = self.matcher_median.as_secs_f64();
        Some((matcher - visitor) / visitor * 100.0)
    }

    /// 機構B / 機構A の比率
    pub fn ratio(&self) -> Option<f64> {
        let visitor = self.visitor_median.as_secs_f64();
        if visitor == 0.0 {
            return None;
        }
        Some(self.matcher_median.as_secs_f64() / visitor)
    }

    pub fn winner(&self) -> Winner {
        match self.visitor_median.cmp(&self.matcher_median) {
            std::cmp::Ordering::Less => Winner::Visitor,
            std::cmp::Ordering::Greater => Winner::Matcher,
            std::cmp::Ordering::Equal => Winner::Tie,
        }
    }

    /// 1反復あたりの平均時間（ナノ秒）
    pub fn per_iteration_nanos(&self) -> (f64, f64) {
        let n = self.iterations.max(1) as f64;
        (
            self.visitor_median.as_nanos() as f64 / n,
            self.matcher_median.as_nanos() as f64 / n,
        )
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (visitor_ns, matcher_ns) = self.per_iteration_nanos();
        write!(
            f,
            "{:.2}ns vs {:.2}ns per call ({} calls)",
            visitor_ns, matcher_ns, self.iterations
        )?;
        match self.relative_percent() {
            Some(percent) if percent > 0.0 => write!(f, " - matching {percent:.1}% slower"),
            Some(percent) if percent < 0.0 => write!(f, " - matching {:.1}% faster", -percent),
            Some(_) => f.write_str(" - equal"),
            None => f.write_str(" - n/a"),
        }
    }
}
