//! ファクトリーモジュール - 実行時コンポーネントの生成
//!
//! - SeededShapeFactory: シードからのオブジェクト生成
//! - ReporterFactory: 名前による計測結果報告実装の選択

pub mod reporter_factory;
pub mod shape_factory;

pub use reporter_factory::ReporterFactory;
pub use shape_factory::{SeededShapeFactory, SHAPE_KINDS};
