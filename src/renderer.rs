use crate::camera::RenderCam;
use crate::image::FilmArc;
use crate::object::SimpleObject;
use crate::scene::{Light, Scene};
use crate::shading::{self, ShadeParams};
use crate::texture::TextureSet;
use crate::*;
use std::sync::Arc;

const T_NEAR: f32 = 1e-3;
const T_FAR: f32 = std::f32::MAX / 2.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub nthread: usize,
    pub background: RGB,
}

pub struct Renderer;

impl Renderer {
    /// One full pass over the film. Thread k owns the pixel columns
    /// congruent to k modulo `nthread`, so every pixel is written exactly
    /// once and the result does not depend on completion order.
    pub fn render(
        &self,
        scene: Arc<Scene>,
        lights: Arc<Vec<Light>>,
        textures: Arc<TextureSet>,
        camera: &RenderCam,
        params: ShadeParams,
        film: FilmArc,
        config: RenderConfig,
    ) {
        use std::thread;
        let mut threads = vec![];
        for i in 0..config.nthread {
            let scene = scene.clone();
            let lights = lights.clone();
            let textures = textures.clone();
            let film = film.clone();
            let camera = camera.clone();
            let thread = thread::spawn(move || {
                Self::render_thread(&scene, &lights, &textures, &camera, params, film, config, i)
            });
            threads.push(thread);
        }
        for thread in threads {
            thread.join().unwrap();
        }
    }

    fn render_thread(
        scene: &Scene,
        lights: &[Light],
        textures: &TextureSet,
        camera: &RenderCam,
        params: ShadeParams,
        film: FilmArc,
        config: RenderConfig,
        thread_id: usize,
    ) {
        let w = film.w();
        let h = film.h();
        let mut samples = Vec::with_capacity(h as usize);
        for x in (thread_id as u32..w).step_by(config.nthread) {
            samples.clear();
            for y in 0..h {
                let u = (x as f32 + 0.5) / w as f32;
                let v = (y as f32 + 0.5) / h as f32;
                let color =
                    Self::render_pixel(scene, lights, textures, camera, params, config, u, v);
                samples.push((y, color));
            }
            film.with_lock(|film| {
                for &(y, color) in samples.iter() {
                    *film.at_mut(x, y) = color;
                }
            })
            .unwrap();
        }
    }

    /// One primary ray. The provisional hit is the intersecting object
    /// whose center lies nearest the eye; the pixel only counts as a hit
    /// if that object re-confirms its intersection.
    fn render_pixel(
        scene: &Scene,
        lights: &[Light],
        textures: &TextureSet,
        camera: &RenderCam,
        params: ShadeParams,
        config: RenderConfig,
        u: f32,
        v: f32,
    ) -> RGB {
        let ray = camera.ray(u, v);
        let point = camera.view_point(u, v);

        let mut shortest = std::f32::INFINITY;
        let mut closest: Option<&SimpleObject> = None;
        for object in scene.traceable() {
            if object.shape.test_hit(&ray, T_NEAR, T_FAR).is_some() {
                let center_dist = (camera.position - object.shape.center()).norm();
                if center_dist < shortest {
                    shortest = center_dist;
                    closest = Some(object);
                }
            }
        }

        let confirmed = closest.and_then(|object| {
            object
                .shape
                .test_hit(&ray, T_NEAR, T_FAR)
                .map(|hit| (object, hit))
        });

        match confirmed {
            Some((object, hit)) => {
                let (diffuse, specular) = object.surface.resolve(&object.shape, &point, textures);
                shading::shade(
                    scene, lights, params, &point, &hit.gnorm, diffuse, specular, &ray,
                )
            }
            None => config.background,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Image;
    use crate::material::Surface;
    use crate::shape::shapes::{Plane, Sphere};

    fn render_once(
        scene: &Arc<Scene>,
        lights: &Arc<Vec<Light>>,
        camera: &RenderCam,
        params: ShadeParams,
        config: RenderConfig,
        w: u32,
        h: u32,
    ) -> Image {
        let film = FilmArc::new(Image::new(w, h));
        Renderer.render(
            scene.clone(),
            lights.clone(),
            Arc::new(TextureSet::default()),
            camera,
            params,
            film.clone(),
            config,
        );
        film.into_image().unwrap()
    }

    #[test]
    fn wall_scene_end_to_end() {
        let wall = SimpleObject::new(
            Plane::new(P3::origin(), V3::z(), 10.0, 10.0),
            Surface::flat(RGB::all(0.8), RGB::all(1.0)),
        );
        let scene = Arc::new(Scene::new(vec![wall]));
        let lights = Arc::new(vec![Light::new(0.0, 0.0, 15.0)]);
        let camera = RenderCam::default();
        let params = ShadeParams::default();
        let config = RenderConfig {
            nthread: 2,
            background: RGB::all(0.1),
        };
        let image = render_once(&scene, &lights, &camera, params, config, 64, 64);

        // A pixel on the wall shades ambient + Lambert + Phong at the
        // view-plane point for that pixel, head-on to the light.
        let (x, y) = (32, 32);
        let u = (x as f32 + 0.5) / 64.0;
        let v = (y as f32 + 0.5) / 64.0;
        let point = camera.view_point(u, v);
        let ray = camera.ray(u, v);
        let expected = shading::shade(
            &scene,
            &lights,
            params,
            &point,
            &V3::z(),
            RGB::all(0.8),
            RGB::all(1.0),
            &ray,
        );
        assert_eq!(*image.at(x, y), expected);
        assert!(expected.r > shading::ambient(RGB::all(0.8)).r);

        // A pixel whose ray projects past the wall's rectangle sees the
        // background.
        assert_eq!(*image.at(0, 0), config.background);
    }

    #[test]
    fn nearer_center_wins_over_nearer_surface() {
        // The big sphere's surface is closer to the eye along the center
        // ray, but the small sphere's center is; the provisional pick goes
        // by center distance.
        let big = SimpleObject::new(
            Sphere {
                center: P3::new(0.0, 0.0, -10.0),
                radius: 15.0,
            },
            Surface::flat(RGB::new(1.0, 0.0, 0.0), RGB::all(0.0)),
        );
        let small = SimpleObject::new(
            Sphere {
                center: P3::new(0.0, 0.0, -2.0),
                radius: 0.5,
            },
            Surface::flat(RGB::new(0.0, 1.0, 0.0), RGB::all(0.0)),
        );
        let scene = Arc::new(Scene::new(vec![big, small]));
        let lights = Arc::new(vec![]);
        let config = RenderConfig {
            nthread: 1,
            background: RGB::all(0.0),
        };
        let image = render_once(
            &scene,
            &lights,
            &RenderCam::default(),
            ShadeParams::default(),
            config,
            3,
            3,
        );
        assert_eq!(*image.at(1, 1), RGB::new(0.0, 1.0, 0.0) * 0.1);
    }

    #[test]
    fn repeated_renders_are_identical() {
        let objects = vec![
            SimpleObject::new(
                Sphere {
                    center: P3::new(0.0, 0.0, -1.0),
                    radius: 1.0,
                },
                Surface::flat(RGB::new(0.9, 0.3, 0.2), RGB::all(1.0)),
            ),
            SimpleObject::new(
                Plane::new(P3::new(0.0, -2.0, 0.0), V3::y(), 20.0, 20.0),
                Surface::flat(RGB::all(0.6), RGB::all(0.9)),
            ),
        ];
        let scene = Arc::new(Scene::new(objects));
        let lights = Arc::new(vec![Light::new(5.0, 1.0, 4.0), Light::new(1.0, 2.0, 4.0)]);
        let camera = RenderCam::default();
        let params = ShadeParams::default();
        let config = RenderConfig {
            nthread: 3,
            background: RGB::all(0.1),
        };
        let first = render_once(&scene, &lights, &camera, params, config, 16, 16);
        let second = render_once(&scene, &lights, &camera, params, config, 16, 16);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(first.at(x, y), second.at(x, y));
            }
        }
    }
}
