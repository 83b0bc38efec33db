// タイミングサンプラー - M回のスイープを計測してサンプル集合を作る

use super::sweep::{execute_sweep, ExecutionMode};
use crate::core::{BenchResult, Checksums, DispatchMechanism};
use crate::shapes::Shape;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// 両機構のスイープ時間のサンプル集合（長さM）
///
/// 繰り返し毎に上書きされる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingSamples {
    pub visitor: Vec<Duration>,
    pub matcher: Vec<Duration>,
    /// 直近の `run_timings` で両機構の結果が最初に食い違った計測番号
    pub first_divergence: Option<usize>,
}

impl TimingSamples {
    pub fn new(measurements: usize) -> Self {
        Self {
            visitor: vec![Duration::ZERO; measurements],
            matcher: vec![Duration::ZERO; measurements],
            first_divergence: None,
        }
    }

    pub fn measurements(&self) -> usize {
        self.visitor.len()
    }
}

/// M回のスイープを実行し、m番目の計測時間をサンプル集合のm番目に格納
///
/// 計測時間にはスレッドの生成とjoinも含まれる。両機構の累積値は
/// スイープ間でリセットせず `totals` に加算し続ける。
/// 戻り値は1計測あたりの反復回数（オブジェクト数）。
pub fn run_timings<A, B>(
    shapes: &[Box<dyn Shape>],
    mode: &ExecutionMode,
    visitor: &A,
    matcher: &B,
    samples: &mut TimingSamples,
    totals: &mut Checksums,
) -> BenchResult<usize>
where
    A: DispatchMechanism + ?Sized,
    B: DispatchMechanism + ?Sized,
{
    debug_assert_eq!(samples.visitor.len(), samples.matcher.len());
    samples.first_divergence = None;

    for m in 0..samples.measurements() {
        let start = Instant::now();
        let visitor_sum = execute_sweep(shapes, mode, visitor)?;
        samples.visitor[m] = start.elapsed();

        let start = Instant::now();
        let matcher_sum = execute_sweep(shapes, mode, matcher)?;
        samples.matcher[m] = start.elapsed();

        if visitor_sum != matcher_sum && samples.first_divergence.is_none() {
            warn!(
                measurement = m,
                visitor = visitor_sum,
                matcher = matcher_sum,
                "スイープ結果が機構間で一致しません"
            );
            samples.first_divergence = Some(m);
        }
        totals.add(visitor_sum, matcher_sum);
    }

    debug!(
        measurements = samples.measurements(),
        worker_threads = mode.worker_threads(),
        visitor_total = totals.visitor,
        matcher_total = totals.matcher,
        "計測完了"
    );
    Ok(shapes.len())
}
