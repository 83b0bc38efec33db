// 不変条件チェック - 両機構の累積チェックサムの一致を確認

use crate::core::{BenchError, BenchResult, Checksums};

/// 実験全体の累積チェックサムが一致しなければ `InvariantViolation`
pub fn check_invariant(checksums: &Checksums) -> BenchResult<()> {
    if checksums.is_consistent() {
        Ok(())
    } else {
        Err(BenchError::invariant_violation(
            checksums.visitor,
            checksums.matcher,
        ))
    }
}
