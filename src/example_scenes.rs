use crate::camera::RenderCam;
use crate::material::Surface;
use crate::object::SimpleObject;
use crate::scene::{Light, Scene};
use crate::shape::shapes::{Plane, Sphere};
use crate::*;

/// The built-in still: three shiny spheres over a tiled floor in front of
/// a tiled back wall, lit by three point lights.
pub fn make_scene() -> (RenderCam, Scene, Vec<Light>) {
    let mut objects = vec![];

    objects.push(SimpleObject::new(
        Sphere {
            center: P3::new(-1.5, -1.0, 0.0),
            radius: 1.0,
        },
        Surface::flat(RGB::new(0.9, 0.2, 0.2), RGB::all(1.0)),
    ));
    objects.push(SimpleObject::new(
        Sphere {
            center: P3::new(1.2, -1.2, -0.5),
            radius: 0.8,
        },
        Surface::flat(RGB::new(0.2, 0.4, 0.9), RGB::all(1.0)),
    ));
    objects.push(SimpleObject::new(
        Sphere {
            center: P3::new(0.0, 0.4, -2.0),
            radius: 1.4,
        },
        Surface::flat(RGB::new(0.2, 0.8, 0.3), RGB::all(1.0)),
    ));
    objects.push(SimpleObject::new(
        Plane::new(P3::new(0.0, -2.0, 0.0), V3::y(), 20.0, 20.0),
        Surface::tiled(RGB::all(0.6), RGB::all(0.9)),
    ));
    objects.push(SimpleObject::new(
        Plane::new(P3::new(0.0, 0.0, -8.0), V3::z(), 20.0, 20.0),
        Surface::tiled(RGB::all(0.6), RGB::all(0.9)),
    ));

    let camera = RenderCam::default();
    let screen = Plane::new(
        camera.view.position,
        V3::z(),
        camera.view.width(),
        camera.view.height(),
    );
    let scene = Scene::new(objects).set_screen(screen);

    let lights = vec![
        Light::new(5.0, 1.0, 4.0),
        Light::new(1.0, 2.0, 4.0),
        Light::new(-3.0, 2.0, 4.0),
    ];

    (camera, scene, lights)
}
