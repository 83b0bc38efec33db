// 2つのディスパッチ機構
// 機構A: ビジターによる二重ディスパッチ / 機構B: ShapeViewに対するパターンマッチ

use super::{
    Circle, Ellipse, Polygon, Rectangle, Shape, ShapeView, ShapeVisitor, Square, Triangle,
};
use crate::core::DispatchMechanism;

/// 面積を計算するビジター
struct AreaVisitor {
    perturbation: usize,
    result: usize,
}

impl ShapeVisitor for AreaVisitor {
    fn visit_circle(&mut self, shape: &Circle) {
        self.result = shape.area_with(self.perturbation);
    }

    fn visit_square(&mut self, shape: &Square) {
        self.result = shape.area_with(self.perturbation);
    }

    fn visit_rectangle(&mut self, shape: &Rectangle) {
        self.result = shape.area_with(self.perturbation);
    }

    fn visit_triangle(&mut self, shape: &Triangle) {
        self.result = shape.area_with(self.perturbation);
    }

    fn visit_ellipse(&mut self, shape: &Ellipse) {
        self.result = shape.area_with(self.perturbation);
    }

    fn visit_polygon(&mut self, shape: &Polygon) {
        self.result = shape.area_with(self.perturbation);
    }
}

/// 機構A: 仮想呼び出しスタイルのビジター
#[derive(Debug, Default, Clone, Copy)]
pub struct VisitorDispatch;

impl VisitorDispatch {
    pub fn new() -> Self {
        Self
    }
}

impl DispatchMechanism for VisitorDispatch {
    fn name(&self) -> &'static str {
        "Vis"
    }

    fn dispatch(&self, shape: &dyn Shape, perturbation: usize) -> usize {
        let mut visitor = AreaVisitor {
            perturbation,
            result: 0,
        };
        shape.accept(&mut visitor);
        visitor.result
    }
}

/// 機構B: 構造的パターンマッチ
#[derive(Debug, Default, Clone, Copy)]
pub struct MatchDispatch;

impl MatchDispatch {
    pub fn new() -> Self {
        Self
    }
}

impl DispatchMechanism for MatchDispatch {
    fn name(&self) -> &'static str {
        "Mat"
    }

    fn dispatch(&self, shape: &dyn Shape, perturbation: usize) -> usize {
        match shape.view() {
            ShapeView::Circle(circle) => circle.area_with(perturbation),
            ShapeView::Square(square) => square.area_with(perturbation),
            ShapeView::Rectangle(rectangle) => rectangle.area_with(perturbation),
            ShapeView::Triangle(triangle) => triangle.area_with(perturbation),
            ShapeView::Ellipse(ellipse) => ellipse.area_with(perturbation),
            ShapeView::Polygon(polygon) => polygon.area_with(perturbation),
        }
    }
}
