use rand::Rng;

use super::core::HitRecord;
use super::math::{Color, Ray, Vec3};

/// How a surface responds to an incoming ray.
///
/// Materials are immutable and shared between primitives through `Rc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Diffuse surface.
    Lambertian { albedo: Color },
    /// Mirror-like surface, `fuzz` in `[0, 1]` roughens the reflection.
    Metal { albedo: Color, fuzz: f64 },
    /// Transparent surface (glass, water), refracts or reflects.
    Dielectric { refraction_index: f64 },
    /// Absorbs every ray.
    Absorbing,
}

/// The outcome of a ray bouncing off a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    pub attenuation: Color,
    pub scattered: Ray,
}

impl Default for Material {
    fn default() -> Self {
        Material::Absorbing
    }
}

impl Material {
    pub fn lambertian(albedo: Color) -> Material {
        Material::Lambertian { albedo }
    }

    pub fn metal(albedo: Color, fuzz: f64) -> Material {
        Material::Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    pub fn dielectric(refraction_index: f64) -> Material {
        Material::Dielectric { refraction_index }
    }

    /// Returns `None` when the ray is absorbed.
    pub fn scatter<R: Rng + ?Sized>(
        &self,
        ray: &Ray,
        hit: &HitRecord,
        rng: &mut R,
    ) -> Option<Scatter> {
        match *self {
            Material::Lambertian { albedo } => {
                let direction = diffuse_direction(hit.normal, Vec3::random_unit_vector(rng));
                Some(Scatter {
                    attenuation: albedo,
                    scattered: Ray::new(hit.point, direction),
                })
            }
            Material::Metal { albedo, fuzz } => {
                let reflected = ray.direction.normalize().reflect(hit.normal);
                let direction = reflected + Vec3::random_unit_vector(rng) * fuzz;
                // rays fuzzed below the surface are absorbed
                if direction.dot(hit.normal) > 0.0 {
                    Some(Scatter {
                        attenuation: albedo,
                        scattered: Ray::new(hit.point, direction),
                    })
                } else {
                    None
                }
            }
            Material::Dielectric { refraction_index } => {
                let ri = if hit.front_face {
                    1.0 / refraction_index
                } else {
                    refraction_index
                };

                let unit_direction = ray.direction.normalize();
                let cos_theta = (-unit_direction).dot(hit.normal).min(1.0);
                let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

                // total internal reflection
                let cannot_refract = ri * sin_theta > 1.0;
                let direction =
                    if cannot_refract || reflectance(cos_theta, ri) > rng.gen::<f64>() {
                        unit_direction.reflect(hit.normal)
                    } else {
                        unit_direction.refract(hit.normal, ri)
                    };

                Some(Scatter {
                    attenuation: Color::one(),
                    scattered: Ray::new(hit.point, direction),
                })
            }
            Material::Absorbing => None,
        }
    }
}

/// Lambertian bounce direction, falls back to the normal when the random
/// offset almost cancels it out.
fn diffuse_direction(normal: Vec3, offset: Vec3) -> Vec3 {
    let direction = normal + offset;
    if direction.near_zero() {
        normal
    } else {
        direction
    }
}

/// Schlick's approximation of the Fresnel reflectance.
pub fn reflectance(cosine: f64, refraction_ratio: f64) -> f64 {
    let mut r0 = (1.0 - refraction_ratio) / (1.0 + refraction_ratio);
    r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
