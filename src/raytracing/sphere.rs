use std::rc::Rc;

use super::core::{HitRecord, RayHittable};
use super::material::Material;
use super::{Interval, Point3, Ray};

#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    material: Rc<Material>,
}

impl Sphere {
    /// Negative radii are clamped to zero.
    pub fn new(center: Point3, radius: f64, material: Rc<Material>) -> Sphere {
        Sphere {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl RayHittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        // a point has no surface and no normal
        if self.radius == 0.0 {
            return None;
        }

        // half-discriminant form of the ray/sphere quadratic
        let oc = self.center - ray.origin;
        let a = ray.direction.squared_len();
        let h = ray.direction.dot(oc);
        let c = oc.squared_len() - self.radius * self.radius;
        let discriminant = h * h - a * c;

        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // nearest root that lies in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(HitRecord::new(ray, root, outward_normal, &self.material))
    }
}
