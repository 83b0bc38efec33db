// ワークロード生成
// 3つの生成ポリシー（逐次・ランダム化・繰り返し）によるオブジェクト集合の構築と解放

pub mod generator;
pub mod seeds;

pub use generator::{ShapeCollection, WorkloadGenerator};
pub use seeds::{repetitive_seed, sequential_seed, EntropySource};
