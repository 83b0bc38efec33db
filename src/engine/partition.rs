// チャンク分割 - [0, N) を T個のワーカーチャンクと1個のインラインチャンクに分割

use std::ops::Range;

/// 1スイープ分のチャンク割り当て
///
/// 先頭T個は幅 `C = N / (T+1)` のワーカーチャンク、最後の1個は余りを吸収する
/// インラインチャンク `[T*C, N)` で、常に調整スレッド上で実行される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPlan {
    worker_chunks: Vec<Range<usize>>,
    inline_chunk: Range<usize>,
}

impl ChunkPlan {
    /// 集合サイズとワーカースレッド数からチャンクを計算
    pub fn new(object_count: usize, worker_threads: usize) -> Self {
        let width = object_count / worker_threads.saturating_add(1);
        let worker_chunks: Vec<_> = (0..worker_threads)
            .map(|i| i * width..(i + 1) * width)
            .collect();
        let inline_chunk = worker_threads * width..object_count;

        Self {
            worker_chunks,
            inline_chunk,
        }
    }

    /// ワーカースレッドに渡すチャンク
    pub fn worker_chunks(&self) -> &[Range<usize>] {
        &self.worker_chunks
    }

    /// 調整スレッドで実行する最後のチャンク
    pub fn inline_chunk(&self) -> Range<usize> {
        self.inline_chunk.clone()
    }

    pub fn worker_threads(&self) -> usize {
        self.worker_chunks.len()
    }

    /// 全チャンク（ワーカー順、最後がインライン）
    pub fn chunks(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.worker_chunks
            .iter()
            .cloned()
            .chain(std::iter::once(self.inline_chunk()))
    }
}
