use crate::material::Surface;
use crate::shape::Shape;

pub struct SimpleObject {
    pub shape: Shape,
    pub surface: Surface,
}

impl SimpleObject {
    pub fn new(shape: impl Into<Shape>, surface: Surface) -> Self {
        SimpleObject {
            shape: shape.into(),
            surface,
        }
    }
}
