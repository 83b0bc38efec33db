// WorkloadGenerator - 生成ポリシーに従ってオブジェクト集合を構築する

use super::seeds::{randomized_seed, repetitive_seed, sequential_seed, EntropySource};
use crate::core::{BenchError, BenchResult, GenerationPolicy, ShapeFactory};
use crate::shapes::Shape;
use rand::rngs::StdRng;
use tracing::debug;

/// 排他的に所有されたオブジェクトの集合
///
/// 実験スコープが所有し、ドロップ時に全ハンドルがちょうど1回ずつ解放される。
pub struct ShapeCollection {
    shapes: Vec<Box<dyn Shape>>,
}

impl ShapeCollection {
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn as_slice(&self) -> &[Box<dyn Shape>] {
        &self.shapes
    }

    /// 集合を明示的に解放し、解放したハンドル数を返す
    pub fn release(self) -> usize {
        let released = self.shapes.len();
        drop(self);
        released
    }
}

impl std::fmt::Debug for ShapeCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeCollection")
            .field("len", &self.shapes.len())
            .finish()
    }
}

/// オブジェクト集合のジェネレーター
///
/// ランダム化ポリシーの乱数生成器は作成時に一度だけシードされる。
pub struct WorkloadGenerator<'a, F: ShapeFactory + ?Sized> {
    factory: &'a F,
    rng: StdRng,
}

impl<'a, F: ShapeFactory + ?Sized> WorkloadGenerator<'a, F> {
    pub fn new(factory: &'a F, entropy: EntropySource) -> Self {
        Self {
            factory,
            rng: entropy.rng(),
        }
    }

    /// ポリシーとインデックスからシード列を計算
    pub fn seeds(
        &mut self,
        policy: GenerationPolicy,
        object_count: usize,
        repetition: usize,
    ) -> Vec<usize> {
        match policy {
            GenerationPolicy::Sequential => (0..object_count).map(sequential_seed).collect(),
            GenerationPolicy::Randomized => (0..object_count)
                .map(|_| randomized_seed(&mut self.rng))
                .collect(),
            GenerationPolicy::Repetitive => (0..object_count)
                .map(|index| repetitive_seed(index, repetition))
                .collect(),
        }
    }

    /// ちょうど `object_count` 個の新しいオブジェクトを生成
    pub fn generate(
        &mut self,
        policy: GenerationPolicy,
        object_count: usize,
        repetition: usize,
    ) -> BenchResult<ShapeCollection> {
        let seeds = self.seeds(policy, object_count, repetition);

        let mut shapes: Vec<Box<dyn Shape>> = Vec::new();
        shapes.try_reserve_exact(object_count).map_err(|e| {
            BenchError::resource_exhaustion(
                "object_collection",
                format!("{object_count}個のハンドルを確保できません: {e}"),
            )
        })?;
        shapes.extend(seeds.into_iter().map(|seed| self.factory.make_shape(seed)));

        debug!(%policy, object_count, repetition, "オブジェクト集合を生成しました");
        Ok(ShapeCollection { shapes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::MockShapeFactory;
    use crate::factories::SeededShapeFactory;
    use crate::shapes::{Circle, ShapeView, ShapeVisitor};
    use mockall::Sequence;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// ドロップ回数を数えるシェイプ
    struct CountingShape {
        inner: Circle,
        drops: Arc<AtomicUsize>,
    }

    impl Drop for CountingShape {
        fn drop(&mut self) {
            self.drops.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl Shape for CountingShape {
        fn name(&self) -> &'static str {
            "CountingShape"
        }

        fn accept(&self, visitor: &mut dyn ShapeVisitor) {
            visitor.visit_circle(&self.inner);
        }

        fn view(&self) -> ShapeView<'_> {
            ShapeView::Circle(&self.inner)
        }
    }

    #[test]
    fn test_sequential_generation_uses_index_seeds() {
        let mut mock_factory = MockShapeFactory::new();
        let mut sequence = Sequence::new();
        for expected in 0..4usize {
            mock_factory
                .expect_make_shape()
                .withf(move |seed| *seed == expected)
                .times(1)
                .in_sequence(&mut sequence)
                .returning(|seed| Box::new(Circle::new(seed)));
        }

        let mut generator = WorkloadGenerator::new(&mock_factory, EntropySource::Fixed(0));
        let collection = generator
            .generate(GenerationPolicy::Sequential, 4, 0)
            .unwrap();
        assert_eq!(collection.len(), 4);
    }

    #[test]
    fn test_repetitive_seeds_independent_of_repetition() {
        let factory = SeededShapeFactory::new();
        let mut generator = WorkloadGenerator::new(&factory, EntropySource::Fixed(0));

        for repetition in 0..3 {
            assert_eq!(
                generator.seeds(GenerationPolicy::Repetitive, 4, repetition),
                vec![0, 2, 4, 6]
            );
        }
    }

    #[test]
    fn test_randomized_seeds_reproducible_with_fixed_entropy() {
        let factory = SeededShapeFactory::new();
        let mut first = WorkloadGenerator::new(&factory, EntropySource::Fixed(99));
        let mut second = WorkloadGenerator::new(&factory, EntropySource::Fixed(99));

        assert_eq!(
            first.seeds(GenerationPolicy::Randomized, 16, 0),
            second.seeds(GenerationPolicy::Randomized, 16, 0)
        );
    }

    #[test]
    fn test_every_handle_released_exactly_once() {
        let drops = Arc::new(AtomicUsize::new(0));
        let mut mock_factory = MockShapeFactory::new();
        let counter = Arc::clone(&drops);
        mock_factory.expect_make_shape().times(10).returning(move |seed| {
            Box::new(CountingShape {
                inner: Circle::new(seed),
                drops: Arc::clone(&counter),
            })
        });

        let mut generator = WorkloadGenerator::new(&mock_factory, EntropySource::Fixed(0));
        let collection = generator
            .generate(GenerationPolicy::Sequential, 10, 0)
            .unwrap();
        assert_eq!(drops.load(Ordering::SeqCst), 0);

        assert_eq!(collection.release(), 10);
        assert_eq!(drops.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn test_empty_collection() {
        let factory = SeededShapeFactory::new();
        let mut generator = WorkloadGenerator::new(&factory, EntropySource::Clock);
        let collection = generator
            .generate(GenerationPolicy::Randomized, 0, 0)
            .unwrap();
        assert!(collection.is_empty());
    }
}
