use crate::*;

/// The image rectangle primary rays are cast through, at a fixed depth on
/// the camera's -z axis. Image row 0 is the top, so the v axis flips.
#[derive(Clone, Debug)]
pub struct ViewPlane {
    pub min: P2,
    pub max: P2,
    pub position: P3,
}

impl ViewPlane {
    pub fn new(min: P2, max: P2, position: P3) -> Self {
        ViewPlane { min, max, position }
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }

    /// Map normalized (u, v) in [0, 1]^2 to the world point on the plane.
    pub fn to_world(&self, u: f32, v: f32) -> P3 {
        P3::new(
            u * self.width() + self.min[0],
            -(v * self.height() + self.min[1]),
            self.position[2],
        )
    }
}

impl Default for ViewPlane {
    fn default() -> Self {
        ViewPlane::new(
            P2::new(-3.0, -2.0),
            P2::new(3.0, 2.0),
            P3::new(0.0, 0.0, 5.0),
        )
    }
}

#[derive(Clone, Debug)]
pub struct RenderCam {
    pub position: P3,
    pub view: ViewPlane,
}

impl RenderCam {
    pub fn new(position: P3, view: ViewPlane) -> Self {
        RenderCam { position, view }
    }

    pub fn ray(&self, u: f32, v: f32) -> Ray {
        Ray::from_to(&self.position, &self.view.to_world(u, v))
    }

    /// Nominal view-plane point for (u, v). The render loop feeds this
    /// point, not the primitive hit point, to shading and shadow tests.
    pub fn view_point(&self, u: f32, v: f32) -> P3 {
        self.view.to_world(u, v)
    }
}

impl Default for RenderCam {
    fn default() -> Self {
        RenderCam::new(P3::new(0.0, 0.0, 10.0), ViewPlane::default())
    }
}
