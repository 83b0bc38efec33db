//! ディスパッチ対象となる多相オブジェクト階層
//!
//! ハーネス本体はこのモジュールをブラックボックスとして扱い、
//! `Shape` トレイトと2つのディスパッチ機構のみに依存する。
//! - ビジター経由の二重ディスパッチ（仮想呼び出しスタイル）
//! - `ShapeView` に対する構造的パターンマッチ

pub mod dispatch;
pub mod hierarchy;

pub use dispatch::{MatchDispatch, VisitorDispatch};
pub use hierarchy::{Circle, Ellipse, Polygon, Rectangle, Square, Triangle};

/// 多相オブジェクトの抽象化トレイト
pub trait Shape: Send + Sync {
    /// 具象型の名前
    fn name(&self) -> &'static str;

    /// ビジターを受け入れる（二重ディスパッチの1段目）
    fn accept(&self, visitor: &mut dyn ShapeVisitor);

    /// 構造的マッチング用のビュー
    fn view(&self) -> ShapeView<'_>;
}

/// 具象型ごとの訪問メソッドを持つビジター
pub trait ShapeVisitor {
    fn visit_circle(&mut self, shape: &Circle);
    fn visit_square(&mut self, shape: &Square);
    fn visit_rectangle(&mut self, shape: &Rectangle);
    fn visit_triangle(&mut self, shape: &Triangle);
    fn visit_ellipse(&mut self, shape: &Ellipse);
    fn visit_polygon(&mut self, shape: &Polygon);
}

/// パターンマッチ用に具象型を借用で公開する列挙型
#[derive(Debug, Clone, Copy)]
pub enum ShapeView<'a> {
    Circle(&'a Circle),
    Square(&'a Square),
    Rectangle(&'a Rectangle),
    Triangle(&'a Triangle),
    Ellipse(&'a Ellipse),
    Polygon(&'a Polygon),
}
