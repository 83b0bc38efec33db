//! 実験結果のレポートモジュール
//!
//! ポリシー毎の判定をJSONとして出力する

pub mod report;

pub use report::{ExperimentReport, PolicyReport};
