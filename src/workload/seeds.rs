// 生成ポリシー毎のシード計算とエントロピー源

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// ランダム化ポリシーの乱数シード供給元
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropySource {
    /// 実行時の時計から導出（実行毎に異なる）
    Clock,
    /// 固定シード（再現可能なテスト用）
    Fixed(u64),
}

impl EntropySource {
    /// 設定値から供給元を決定
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(Self::Clock, Self::Fixed)
    }

    /// 乱数生成器に与えるシードを確定
    pub fn resolve(&self) -> u64 {
        match self {
            Self::Clock => clock_seed(),
            Self::Fixed(seed) => *seed,
        }
    }

    /// シード済みの乱数生成器を作成
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.resolve())
    }
}

/// 現在時刻（マイクロ秒）からシードを導出
fn clock_seed() -> u64 {
    chrono::Utc::now().timestamp_micros().unsigned_abs()
}

/// 逐次ポリシー: i番目はシードi
pub fn sequential_seed(index: usize) -> usize {
    index
}

/// 繰り返しポリシー: i番目はシード2i
///
/// 繰り返し番号kはシードに影響しない。集合は繰り返し毎に再構築されるが、
/// 各繰り返しで同じシード列 `0, 2, 4, ...` が使われる。
pub fn repetitive_seed(index: usize, _repetition: usize) -> usize {
    index.wrapping_mul(2)
}

/// ランダム化ポリシー: 非負の31ビット乱数
pub fn randomized_seed(rng: &mut StdRng) -> usize {
    rng.gen_range(0..=i32::MAX as usize)
}
