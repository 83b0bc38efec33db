// テスト用のモック実装
// mockallのモックでは表現しにくい、状態を持つテストダブル

use dispatch_bench::core::{DispatchMechanism, ShapeFactory};
use dispatch_bench::{SeededShapeFactory, Shape, VisitorDispatch};
use std::sync::Mutex;

// 公開APIとしてmockallが生成したモックを再エクスポート
pub use dispatch_bench::core::traits::MockBenchmarkReporter;

/// ビジターの結果に1を足す、意図的に壊れた機構
pub struct OffByOneDispatch {
    inner: VisitorDispatch,
}

impl OffByOneDispatch {
    pub fn new() -> Self {
        Self {
            inner: VisitorDispatch::new(),
        }
    }
}

impl DispatchMechanism for OffByOneDispatch {
    fn name(&self) -> &'static str {
        "Bad"
    }

    fn dispatch(&self, shape: &dyn Shape, perturbation: usize) -> usize {
        self.inner.dispatch(shape, perturbation).wrapping_add(1)
    }
}

/// 受け取ったシードを記録するファクトリー
pub struct RecordingShapeFactory {
    inner: SeededShapeFactory,
    seeds: Mutex<Vec<usize>>,
}

impl RecordingShapeFactory {
    pub fn new() -> Self {
        Self {
            inner: SeededShapeFactory::new(),
            seeds: Mutex::new(Vec::new()),
        }
    }

    pub fn seeds(&self) -> Vec<usize> {
        self.seeds.lock().unwrap().clone()
    }
}

impl ShapeFactory for RecordingShapeFactory {
    fn make_shape(&self, seed: usize) -> Box<dyn Shape> {
        self.seeds.lock().unwrap().push(seed);
        self.inner.make_shape(seed)
    }
}
