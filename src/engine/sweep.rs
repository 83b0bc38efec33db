// スイープ実行エンジン - 1つのディスパッチ機構で集合全体を1回走査する
//
// 並列モードではスイープ毎にT個のOSスレッドを新規に生成し、最後のチャンクは
// 調整スレッドで実行する。全スレッドをjoinしてから累積値を読む。

use super::partition::ChunkPlan;
use super::perturbation::perturbation;
use crate::core::{BenchError, BenchResult, DispatchMechanism};
use crate::shapes::Shape;
use std::any::Any;
use std::ops::Range;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use tracing::trace;

/// スイープの実行方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionMode {
    /// ワーカースレッドなし。単一スレッドの累積和
    Sequential,
    /// スイープ毎にワーカースレッドを生成し、共有アトミックカウンタに加算
    Parallel(ChunkPlan),
}

impl ExecutionMode {
    /// ワーカースレッド数0なら逐次、それ以外は並列
    pub fn new(object_count: usize, worker_threads: usize) -> Self {
        if worker_threads == 0 {
            Self::Sequential
        } else {
            Self::Parallel(ChunkPlan::new(object_count, worker_threads))
        }
    }

    pub fn worker_threads(&self) -> usize {
        match self {
            Self::Sequential => 0,
            Self::Parallel(plan) => plan.worker_threads(),
        }
    }
}

/// 1チャンク分を処理してチャンク内の部分和を返す
///
/// 摂動テーブルの位置はチャンクのグローバル開始位置から始まり、
/// 1オブジェクト毎に1進んで256で一周する。
pub fn partial_sweep<D>(shapes: &[Box<dyn Shape>], range: Range<usize>, mechanism: &D) -> usize
where
    D: DispatchMechanism + ?Sized,
{
    let start = range.start;
    shapes[range]
        .iter()
        .enumerate()
        .fold(0usize, |sum, (offset, shape)| {
            sum.wrapping_add(mechanism.dispatch(shape.as_ref(), perturbation(start + offset)))
        })
}

/// 全チャンクを並列に実行し、各チャンクの部分和を共有カウンタに1回ずつ加算
///
/// 戻った時点で全ワーカーはjoin済み。ワーカーのパニックは `ThreadPanic`、
/// スレッド生成の失敗は `ResourceExhaustionError` として返す。
pub fn parallel_sweep<D>(
    shapes: &[Box<dyn Shape>],
    plan: &ChunkPlan,
    mechanism: &D,
    accumulator: &AtomicUsize,
) -> BenchResult<()>
where
    D: DispatchMechanism + ?Sized,
{
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(plan.worker_threads());
        for range in plan.worker_chunks().iter().cloned() {
            let spawned = thread::Builder::new().spawn_scoped(scope, move || {
                let partial = partial_sweep(shapes, range, mechanism);
                // joinが順序付けを保証するためRelaxedで十分
                accumulator.fetch_add(partial, Ordering::Relaxed);
            });
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    // 生成済みのワーカーはjoinしてから返す
                    for handle in handles {
                        let _ = handle.join();
                    }
                    return Err(BenchError::resource_exhaustion(
                        "worker_thread",
                        format!("{}のワーカースレッドを生成できません: {e}", mechanism.name()),
                    ));
                }
            }
        }

        let inline = panic::catch_unwind(AssertUnwindSafe(|| {
            let partial = partial_sweep(shapes, plan.inline_chunk(), mechanism);
            accumulator.fetch_add(partial, Ordering::Relaxed);
        }));

        let mut failure = inline.err().map(panic_message);
        for handle in handles {
            if let Err(payload) = handle.join() {
                failure.get_or_insert_with(|| panic_message(payload));
            }
        }

        match failure {
            Some(message) => Err(BenchError::thread_panic(format!(
                "{}のスイープ中にパニック: {message}",
                mechanism.name()
            ))),
            None => Ok(()),
        }
    })
}

/// 1スイープを実行してその累積値を返す
///
/// 呼び出し毎に新しい累積値（0から）を使う。
pub fn execute_sweep<D>(
    shapes: &[Box<dyn Shape>],
    mode: &ExecutionMode,
    mechanism: &D,
) -> BenchResult<usize>
where
    D: DispatchMechanism + ?Sized,
{
    let sum = match mode {
        ExecutionMode::Sequential => partial_sweep(shapes, 0..shapes.len(), mechanism),
        ExecutionMode::Parallel(plan) => {
            let accumulator = AtomicUsize::new(0);
            parallel_sweep(shapes, plan, mechanism, &accumulator)?;
            accumulator.load(Ordering::Relaxed)
        }
    };
    trace!(mechanism = mechanism.name(), sum, "スイープ完了");
    Ok(sum)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "不明なパニック".to_string()
    }
}
