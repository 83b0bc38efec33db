// 摂動テーブル - ディスパッチ呼び出しの第2引数をオブジェクト毎に変化させる
// プロセス全体で不変の定数テーブル。両機構が同じインデックスで参照する

/// テーブル長（1バイトのカウンタで一周する）
pub const PERTURBATION_TABLE_LEN: usize = 256;

/// 先頭120個の素数を2回繰り返し、最後に先頭16個を続けた256要素の表
pub static PERTURBATION_TABLE: [usize; PERTURBATION_TABLE_LEN] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29,
    31, 37, 41, 43, 47, 53, 59, 61, 67, 71,
    73, 79, 83, 89, 97, 101, 103, 107, 109, 113,
    127, 131, 137, 139, 149, 151, 157, 163, 167, 173,
    179, 181, 191, 193, 197, 199, 211, 223, 227, 229,
    233, 239, 241, 251, 257, 263, 269, 271, 277, 281,
    283, 293, 307, 311, 313, 317, 331, 337, 347, 349,
    353, 359, 367, 373, 379, 383, 389, 397, 401, 409,
    419, 421, 431, 433, 439, 443, 449, 457, 461, 463,
    467, 479, 487, 491, 499, 503, 509, 521, 523, 541,
    547, 557, 563, 569, 571, 577, 587, 593, 599, 601,
    607, 613, 617, 619, 631, 641, 643, 647, 653, 659,
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29,
    31, 37, 41, 43, 47, 53, 59, 61, 67, 71,
    73, 79, 83, 89, 97, 101, 103, 107, 109, 113,
    127, 131, 137, 139, 149, 151, 157, 163, 167, 173,
    179, 181, 191, 193, 197, 199, 211, 223, 227, 229,
    233, 239, 241, 251, 257, 263, 269, 271, 277, 281,
    283, 293, 307, 311, 313, 317, 331, 337, 347, 349,
    353, 359, 367, 373, 379, 383, 389, 397, 401, 409,
    419, 421, 431, 433, 439, 443, 449, 457, 461, 463,
    467, 479, 487, 491, 499, 503, 509, 521, 523, 541,
    547, 557, 563, 569, 571, 577, 587, 593, 599, 601,
    607, 613, 617, 619, 631, 641, 643, 647, 653, 659,
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29,
    31, 37, 41, 43, 47, 53,
];

/// グローバルなオブジェクトインデックスに対応するテーブル位置（256で一周）
#[inline]
pub fn table_index(global_index: usize) -> usize {
    global_index % PERTURBATION_TABLE_LEN
}

/// グローバルなオブジェクトインデックスに対応する摂動値
#[inline]
pub fn perturbation(global_index: usize) -> usize {
    PERTURBATION_TABLE[table_index(global_index)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_values_are_small_positive() {
        assert!(PERTURBATION_TABLE.iter().all(|&value| (2..=659).contains(&value)));
        assert_eq!(PERTURBATION_TABLE[0], 2);
        assert_eq!(PERTURBATION_TABLE[119], 659);
        assert_eq!(PERTURBATION_TABLE[120], 2);
        assert_eq!(PERTURBATION_TABLE[255], 53);
    }

    #[test]
    fn test_index_wraps_every_256() {
        let positions: Vec<_> = (255..258).map(table_index).collect();
        assert_eq!(positions, vec![255, 0, 1]);
        assert_eq!(perturbation(256), perturbation(0));
        assert_eq!(perturbation(255 + 256 * 7), PERTURBATION_TABLE[255]);
    }

    #[test]
    fn test_matches_byte_truncation() {
        for index in [0usize, 1, 255, 256, 1000, 65_535, usize::MAX] {
            assert_eq!(table_index(index), (index as u8) as usize);
        }
    }
}
