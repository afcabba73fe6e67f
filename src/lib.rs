use nalgebra::{Point2, Point3, Vector3};

pub type P2 = Point2<f32>;
pub type P3 = Point3<f32>;
pub type V3 = Vector3<f32>;

pub mod camera;
pub mod example_scenes;
pub mod image;
pub mod material;
pub mod object;
pub mod ray {
    use crate::*;
    #[derive(Clone, Debug)]
    pub struct Ray {
        pub origin: P3,
        pub dir: V3,
    }

    impl Ray {
        pub fn new(origin: P3, dir: V3) -> Self {
            Ray { origin, dir }
        }

        pub fn from_to(origin: &P3, target: &P3) -> Self {
            Ray::new(*origin, (target - origin).normalize())
        }

        pub fn at(&self, t: f32) -> P3 {
            self.origin + self.dir * t
        }
    }
}
pub mod renderer;
pub mod rgb;
pub mod scene;
pub mod shading;
pub mod shape;
pub mod texture;

pub use ray::Ray;
pub use rgb::RGB;
