use crate::scene::{Light, Scene};
use crate::*;

const AMBIENT_FACTOR: f32 = 0.1;
const SHADOW_BIAS: f32 = 1e-4;

/// The two externally tuned knobs, shared by every material in the scene.
#[derive(Clone, Copy, Debug)]
pub struct ShadeParams {
    pub phong_power: f32,
    pub light_intensity: f32,
}

impl Default for ShadeParams {
    fn default() -> Self {
        ShadeParams {
            phong_power: 1000.0,
            light_intensity: 250.0,
        }
    }
}

pub fn ambient(diffuse: RGB) -> RGB {
    diffuse * AMBIENT_FACTOR
}

/// Diffuse term. `r` is the squared light distance and the attenuation
/// divides by its square, so brightness falls off with the fourth power of
/// distance.
pub fn lambert(p: &P3, norm: &V3, diffuse: RGB, light: &Light, intensity: f32) -> RGB {
    let r = (light.position - p).norm_squared();
    let l = (light.position - p).normalize();
    let n = norm.normalize();
    diffuse * (intensity / (r * r)) * n.dot(&l).max(0.0)
}

/// Blinn-Phong highlight with the same fourth-power falloff as `lambert`.
pub fn blinn_phong(
    p: &P3,
    norm: &V3,
    specular: RGB,
    power: f32,
    ray_dir: &V3,
    light: &Light,
    intensity: f32,
) -> RGB {
    let l = (light.position - p).normalize();
    let n = norm.normalize();
    let v = -ray_dir.normalize();
    let h = (v + l).normalize();
    let r = (light.position - p).norm_squared();
    specular * (intensity / (r * r)) * n.dot(&h).max(0.0).powf(power)
}

/// Ambient plus, for each light that survives its shadow test, one Lambert
/// and one Blinn-Phong contribution. The shadow ray starts a small step
/// along the normal to avoid hitting the surface it leaves.
pub fn shade(
    scene: &Scene,
    lights: &[Light],
    params: ShadeParams,
    p: &P3,
    norm: &V3,
    diffuse: RGB,
    specular: RGB,
    ray: &Ray,
) -> RGB {
    let mut shade = ambient(diffuse);
    for light in lights {
        let origin = p + norm.normalize() * SHADOW_BIAS;
        if scene.visible(&origin, &light.position) {
            shade += lambert(p, norm, diffuse, light, params.light_intensity)
                + blinn_phong(
                    p,
                    norm,
                    specular,
                    params.phong_power,
                    &ray.dir,
                    light,
                    params.light_intensity,
                );
        }
    }
    shade
}
