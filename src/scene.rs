use crate::object::SimpleObject;
use crate::shape::shapes::Plane;
use crate::*;

/// A point light. Intensity is a single scalar shared by every light,
/// configured on `shading::ShadeParams` rather than stored here.
#[derive(Clone, Debug)]
pub struct Light {
    pub position: P3,
}

impl Light {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Light {
            position: P3::new(x, y, z),
        }
    }
}

pub struct Scene {
    objects: Vec<SimpleObject>,
    screen: Option<Plane>,
}

impl Scene {
    pub fn new(objects: Vec<SimpleObject>) -> Self {
        Scene {
            objects,
            screen: None,
        }
    }

    /// Register the display screen rectangle. It exists for preview
    /// consumers only and never takes part in intersection or occlusion
    /// tests.
    pub fn set_screen(mut self, screen: Plane) -> Self {
        self.screen = Some(screen);
        self
    }

    pub fn traceable(&self) -> &[SimpleObject] {
        &self.objects
    }

    pub fn screen(&self) -> Option<&Plane> {
        self.screen.as_ref()
    }

    /// True when nothing traceable blocks the segment from `x` to `y`.
    pub fn visible(&self, x: &P3, y: &P3) -> bool {
        let r = y - x;
        let dist = r.norm();
        let ray = Ray::new(*x, r / dist);
        self.traceable()
            .iter()
            .all(|o| o.shape.test_hit(&ray, 1e-3, dist - 1e-3).is_none())
    }
}
