//! SeededShapeFactory - シードから決定的にシェイプを生成するファクトリ

use crate::core::ShapeFactory;
use crate::shapes::{Circle, Ellipse, Polygon, Rectangle, Shape, Square, Triangle};

/// 具象型の種類数
pub const SHAPE_KINDS: usize = 6;

/// シード値から具象型と寸法を決定するファクトリ
///
/// 種類は `seed % SHAPE_KINDS`、寸法は残りのビットから導出する。
#[derive(Debug, Default, Clone, Copy)]
pub struct SeededShapeFactory;

impl SeededShapeFactory {
    pub fn new() -> Self {
        Self
    }
}

impl ShapeFactory for SeededShapeFactory {
    fn make_shape(&self, seed: usize) -> Box<dyn Shape> {
        let size = seed / SHAPE_KINDS % 97 + 1;
        let other = seed / SHAPE_KINDS % 13 + 1;

        match seed % SHAPE_KINDS {
            0 => Box::new(Circle::new(size)),
            1 => Box::new(Square::new(size)),
            2 => Box::new(Rectangle::new(size, other)),
            3 => Box::new(Triangle::new(size, other)),
            4 => Box::new(Ellipse::new(size, other)),
            _ => Box::new(Polygon::new(other + 2, size)),
        }
    }
}
