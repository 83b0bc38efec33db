// 具象シェイプ型
// 面積計算はラップアラウンド演算で行い、両ディスパッチ機構から共通に呼ばれる

use super::{Shape, ShapeView, ShapeVisitor};

macro_rules! impl_shape {
    ($ty:ident, $visit:ident) => {
        impl Shape for $ty {
            fn name(&self) -> &'static str {
                stringify!($ty)
            }

            fn accept(&self, visitor: &mut dyn ShapeVisitor) {
                visitor.$visit(self);
            }

            fn view(&self) -> ShapeView<'_> {
                ShapeView::$ty(self)
            }
        }
    };
}

/// 円
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub radius: usize,
}

impl Circle {
    pub fn new(radius: usize) -> Self {
        Self { radius }
    }

    pub fn area_with(&self, perturbation: usize) -> usize {
        self.radius
            .wrapping_mul(self.radius)
            .wrapping_mul(3)
            .wrapping_add(perturbation)
    }
}

/// 正方形
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub side: usize,
}

impl Square {
    pub fn new(side: usize) -> Self {
        Self { side }
    }

    pub fn area_with(&self, perturbation: usize) -> usize {
        self.side.wrapping_mul(self.side).wrapping_add(perturbation)
    }
}

/// 長方形
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub width: usize,
    pub height: usize,
}

impl Rectangle {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn area_with(&self, perturbation: usize) -> usize {
        self.width.wrapping_mul(self.height).wrapping_add(perturbation)
    }
}

/// 三角形
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub base: usize,
    pub height: usize,
}

impl Triangle {
    pub fn new(base: usize, height: usize) -> Self {
        Self { base, height }
    }

    pub fn area_with(&self, perturbation: usize) -> usize {
        (self.base.wrapping_mul(self.height) / 2).wrapping_add(perturbation)
    }
}

/// 楕円
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    pub major: usize,
    pub minor: usize,
}

impl Ellipse {
    pub fn new(major: usize, minor: usize) -> Self {
        Self { major, minor }
    }

    pub fn area_with(&self, perturbation: usize) -> usize {
        self.major
            .wrapping_mul(self.minor)
            .wrapping_mul(3)
            .wrapping_add(perturbation)
    }
}

/// 正多角形
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Polygon {
    pub sides: usize,
    pub side_length: usize,
}

impl Polygon {
    pub fn new(sides: usize, side_length: usize) -> Self {
        Self { sides, side_length }
    }

    pub fn area_with(&self, perturbation: usize) -> usize {
        self.sides
            .wrapping_mul(self.side_length)
            .wrapping_mul(self.side_length)
            .wrapping_div(4)
            .wrapping_add(perturbation)
    }
}

impl_shape!(Circle, visit_circle);
impl_shape!(Square, visit_square);
impl_shape!(Rectangle, visit_rectangle);
impl_shape!(Triangle, visit_triangle);
impl_shape!(Ellipse, visit_ellipse);
impl_shape!(Polygon, visit_polygon);
