//! Scenes built in code and selectable from the command line.

use std::rc::Rc;

use super::core::Scene;
use super::material::Material;
use super::sphere::Sphere;
use super::{Color, Point3};

/// A single diffuse sphere one unit in front of the camera.
pub fn single_sphere() -> Scene {
    let material = Rc::new(Material::lambertian(Color::new(0.5, 0.5, 0.5)));
    Scene::with_object(Rc::new(Sphere::new(
        Point3::new(0.0, 0.0, -1.0),
        0.5,
        material,
    )))
}

/// The single sphere resting on a huge sphere acting as the ground.
pub fn sphere_on_ground() -> Scene {
    let material = Rc::new(Material::lambertian(Color::new(0.5, 0.5, 0.5)));
    let mut scene = Scene::new();
    scene.add(Rc::new(Sphere::new(
        Point3::new(0.0, 0.0, -1.0),
        0.5,
        Rc::clone(&material),
    )));
    scene.add(Rc::new(Sphere::new(
        Point3::new(0.0, -100.5, -1.0),
        100.0,
        material,
    )));
    scene
}

/// One sphere per material: diffuse, hollow glass and fuzzy metal on a
/// diffuse ground.
pub fn material_showcase() -> Scene {
    let ground = Rc::new(Material::lambertian(Color::new(0.8, 0.8, 0.0)));
    let center = Rc::new(Material::lambertian(Color::new(0.1, 0.2, 0.5)));
    let glass = Rc::new(Material::dielectric(1.5));
    let bubble = Rc::new(Material::dielectric(1.0 / 1.5));
    let metal = Rc::new(Material::metal(Color::new(0.8, 0.6, 0.2), 1.0));

    let mut scene = Scene::new();
    scene.add(Rc::new(Sphere::new(
        Point3::new(0.0, -100.5, -1.0),
        100.0,
        ground,
    )));
    scene.add(Rc::new(Sphere::new(Point3::new(0.0, 0.0, -1.2), 0.5, center)));
    scene.add(Rc::new(Sphere::new(Point3::new(-1.0, 0.0, -1.0), 0.5, glass)));
    scene.add(Rc::new(Sphere::new(Point3::new(-1.0, 0.0, -1.0), 0.4, bubble)));
    scene.add(Rc::new(Sphere::new(Point3::new(1.0, 0.0, -1.0), 0.5, metal)));
    scene
}
