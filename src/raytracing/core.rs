use std::rc::Rc;
use std::vec::Vec;

use super::material::Material;
use super::math::{Interval, Point3, Ray, Vec3};

/// Everything shading needs to know about an intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    pub point: Point3,
    // always points against the incoming ray, see `front_face`
    pub normal: Vec3,
    pub t: f64,
    pub front_face: bool,
    pub material: &'a Material,
}

impl<'a> HitRecord<'a> {
    /// Builds a record orienting `outward_normal` (assumed unit length)
    /// against the incoming ray.
    pub fn new(
        ray: &Ray,
        t: f64,
        outward_normal: Vec3,
        material: &'a Material,
    ) -> HitRecord<'a> {
        let front_face = ray.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        HitRecord {
            point: ray.at(t),
            normal,
            t,
            front_face,
            material,
        }
    }
}

pub trait RayHittable {
    /// Intersects the ray, accepting only a parameter `t` strictly inside `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// A group of objects that is itself hittable, reporting the closest hit.
#[derive(Default, Clone)]
pub struct Scene {
    pub objects: Vec<Rc<dyn RayHittable>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(object: Rc<dyn RayHittable>) -> Self {
        let mut scene = Self::new();
        scene.add(object);
        scene
    }

    pub fn add(&mut self, object: Rc<dyn RayHittable>) {
        self.objects.push(object);
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl RayHittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest_so_far = ray_t.max;
        let mut closest_hit = None;
        for object in &self.objects {
            // the upper bound shrinks, so only strictly closer hits replace the current one
            if let Some(hit) = object.hit(ray, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = hit.t;
                closest_hit = Some(hit);
            }
        }
        closest_hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raytracing::math::Color;
    use crate::raytracing::sphere::Sphere;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn sphere(center: Point3, radius: f64, material: &Rc<Material>) -> Rc<dyn RayHittable> {
        Rc::new(Sphere::new(center, radius, Rc::clone(material)))
    }

    fn forward_ray() -> Ray {
        Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn empty_scene_never_hits() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert!(scene
            .hit(&forward_ray(), Interval::new(0.0, f64::INFINITY))
            .is_none());
    }

    #[test]
    fn closest_object_wins_regardless_of_order() {
        let material = Rc::new(Material::lambertian(Color::new(0.5, 0.5, 0.5)));
        let near = sphere(Point3::new(0.0, 0.0, -2.0), 0.5, &material);
        let far = sphere(Point3::new(0.0, 0.0, -5.0), 0.5, &material);
        let behind = sphere(Point3::new(0.0, 0.0, 3.0), 0.5, &material);
        let ray = forward_ray();
        let interval = Interval::new(0.0, f64::INFINITY);

        let expected = [&near, &far, &behind]
            .iter()
            .filter_map(|object| object.hit(&ray, interval))
            .map(|hit| hit.t)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(expected, 1.5);

        let orders = [
            vec![near.clone(), far.clone(), behind.clone()],
            vec![behind.clone(), far.clone(), near.clone()],
            vec![far.clone(), near.clone(), behind.clone()],
        ];
        for objects in orders {
            let scene = Scene { objects };
            let hit = scene.hit(&ray, interval).unwrap();
            assert_eq!(hit.t, expected);
            assert_eq!(hit.point, Point3::new(0.0, 0.0, -1.5));
        }
    }

    #[test]
    fn random_scenes_report_the_closest_member_hit() {
        let mut rng = StdRng::seed_from_u64(17);
        let material = Rc::new(Material::default());
        for _ in 0..300 {
            let count = rng.gen_range(0..8);
            let spheres: Vec<Sphere> = (0..count)
                .map(|_| {
                    let center = Vec3::random_range(&mut rng, -4.0, 4.0);
                    Sphere::new(center, rng.gen_range(0.2..1.5), Rc::clone(&material))
                })
                .collect();
            let mut scene = Scene::new();
            for sphere in &spheres {
                scene.add(Rc::new(sphere.clone()));
            }

            let origin = Vec3::random_range(&mut rng, -6.0, 6.0);
            let ray = Ray::new(origin, Vec3::random_unit_vector(&mut rng));
            let interval = Interval::new(rng.gen_range(0.0..0.5), rng.gen_range(2.0..20.0));

            let expected = spheres
                .iter()
                .filter_map(|sphere| sphere.hit(&ray, interval))
                .map(|hit| hit.t)
                .fold(f64::INFINITY, f64::min);

            match scene.hit(&ray, interval) {
                Some(hit) => assert_eq!(hit.t, expected),
                None => assert_eq!(expected, f64::INFINITY),
            }
        }
    }

    #[test]
    fn interval_limits_apply_to_members() {
        let material = Rc::new(Material::lambertian(Color::one()));
        let scene = Scene::with_object(sphere(Point3::new(0.0, 0.0, -5.0), 1.0, &material));
        let ray = forward_ray();
        assert!(scene.hit(&ray, Interval::new(0.0, 3.0)).is_none());
        assert_eq!(scene.hit(&ray, Interval::new(0.0, 10.0)).unwrap().t, 4.0);
    }

    #[test]
    fn ties_keep_the_first_inserted() {
        let first = Rc::new(Material::lambertian(Color::new(1.0, 0.0, 0.0)));
        let second = Rc::new(Material::lambertian(Color::new(0.0, 1.0, 0.0)));
        let mut scene = Scene::new();
        scene.add(sphere(Point3::new(0.0, 0.0, -2.0), 0.5, &first));
        scene.add(sphere(Point3::new(0.0, 0.0, -2.0), 0.5, &second));

        let hit = scene
            .hit(&forward_ray(), Interval::new(0.0, f64::INFINITY))
            .unwrap();
        assert_eq!(*hit.material, *first);
    }

    #[test]
    fn nested_scenes_are_hittable() {
        let material = Rc::new(Material::lambertian(Color::one()));
        let inner = Scene::with_object(sphere(Point3::new(0.0, 0.0, -2.0), 0.5, &material));
        let mut outer = Scene::new();
        outer.add(Rc::new(inner));
        outer.add(sphere(Point3::new(0.0, 0.0, -4.0), 0.5, &material));

        let hit = outer
            .hit(&forward_ray(), Interval::new(0.0, f64::INFINITY))
            .unwrap();
        assert_eq!(hit.t, 1.5);
    }

    #[test]
    fn clear_resets_the_scene() {
        let material = Rc::new(Material::default());
        let mut scene = Scene::new();
        scene.add(sphere(Point3::new(0.0, 0.0, -2.0), 0.5, &material));
        scene.add(sphere(Point3::new(1.0, 0.0, -2.0), 0.5, &material));
        assert_eq!(scene.len(), 2);

        scene.clear();
        assert!(scene.is_empty());
        assert!(scene
            .hit(&forward_ray(), Interval::new(0.0, f64::INFINITY))
            .is_none());
    }
}
