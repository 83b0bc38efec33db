// 判定集約 - 計測毎の中央値と、繰り返し全体の中央値の中央値

use crate::core::{BenchError, BenchResult, BenchmarkReporter, TimingSummary, Verdict};
use std::time::Duration;

/// 中央値（ソート後の `len / 2` 番目）。空ならNone
pub fn median<T: Ord + Copy>(samples: &[T]) -> Option<T> {
    if samples.is_empty() {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_unstable();
    Some(sorted[sorted.len() / 2])
}

/// サンプル集合の中央値を計算して報告し、その中央値を返す
pub fn display_timings<R>(
    reporter: &R,
    label: &str,
    samples: &[Duration],
    iterations: usize,
) -> BenchResult<Duration>
where
    R: BenchmarkReporter + ?Sized,
{
    let median = median(samples).ok_or_else(|| {
        BenchError::validation("measurements", format!("{label}: 計測値がありません"))
    })?;

    reporter.report_timings(
        label,
        &TimingSummary {
            median,
            samples: samples.len(),
            iterations,
        },
    );
    Ok(median)
}

/// 繰り返し毎の中央値の集合（長さK）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedianSet {
    visitor: Vec<Duration>,
    matcher: Vec<Duration>,
}

impl MedianSet {
    pub fn with_capacity(repetitions: usize) -> Self {
        Self {
            visitor: Vec::with_capacity(repetitions),
            matcher: Vec::with_capacity(repetitions),
        }
    }

    pub fn push(&mut self, visitor: Duration, matcher: Duration) {
        self.visitor.push(visitor);
        self.matcher.push(matcher);
    }

    pub fn len(&self) -> usize {
        self.visitor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visitor.is_empty()
    }

    /// 中央値の中央値を最終判定とする
    pub fn final_verdict(&self, iterations: usize) -> BenchResult<Verdict> {
        match (median(&self.visitor), median(&self.matcher)) {
            (Some(visitor), Some(matcher)) => Ok(Verdict::new(iterations, visitor, matcher)),
            _ => Err(BenchError::validation(
                "repetitions",
                "集約する中央値がありません",
            )),
        }
    }
}
