use rand::Rng;
use std::ops;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A position in world space.
pub type Point3 = Vec3;

/// A linear RGB color, one channel per component.
pub type Color = Vec3;

impl ops::Add<Vec3> for Vec3 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl ops::AddAssign<Vec3> for Vec3 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl ops::Sub<Vec3> for Vec3 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl ops::Neg for Vec3 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl ops::Mul<f64> for Vec3 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: f64) -> Self::Output {
        Vec3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl ops::Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline(always)]
    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

impl ops::Mul<Vec3> for Vec3 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        }
    }
}

impl ops::Div<f64> for Vec3 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: f64) -> Self::Output {
        Vec3 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl Vec3 {
    #[inline(always)]
    pub fn zero() -> Vec3 {
        Vec3::new(0.0, 0.0, 0.0)
    }

    #[inline(always)]
    pub fn one() -> Vec3 {
        Vec3::new(1.0, 1.0, 1.0)
    }

    #[inline(always)]
    pub fn y_axis() -> Vec3 {
        Vec3::new(0.0, 1.0, 0.0)
    }

    #[inline(always)]
    pub fn z_axis() -> Vec3 {
        Vec3::new(0.0, 0.0, 1.0)
    }

    #[inline(always)]
    pub fn new(x: f64, y: f64, z: f64) -> Vec3 {
        Vec3 { x, y, z }
    }

    /// Every component drawn uniformly from `[min, max)`.
    pub fn random_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Vec3 {
        Vec3::new(
            rng.gen_range(min..max),
            rng.gen_range(min..max),
            rng.gen_range(min..max),
        )
    }

    /// A uniformly distributed direction on the unit sphere.
    ///
    /// Uses rejection sampling inside the unit cube; points too close to the
    /// origin are discarded as well, their normalization would blow up.
    pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
        loop {
            let p = Vec3::random_range(rng, -1.0, 1.0);
            let squared_len = p.squared_len();
            if 1e-160 < squared_len && squared_len <= 1.0 {
                return p / squared_len.sqrt();
            }
        }
    }

    #[inline(always)]
    pub fn reflect(self: Self, axis: Vec3) -> Vec3 {
        // reflect the passed vector with respect at this vector used as axis
        self - axis * 2.0 * self.dot(axis)
    }

    /// Bends this unit vector through a surface with normal `normal`, given the
    /// ratio between the refractive indices of the two media.
    pub fn refract(self: Self, normal: Vec3, etai_over_etat: f64) -> Vec3 {
        let cos_theta = (-self).dot(normal).min(1.0);
        let r_out_perp = (self + normal * cos_theta) * etai_over_etat;
        let r_out_parallel = normal * -(1.0 - r_out_perp.squared_len()).abs().sqrt();
        r_out_perp + r_out_parallel
    }

    #[inline(always)]
    pub fn dot(self: &Self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline(always)]
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline(always)]
    pub fn distance(self, other: Vec3) -> f64 {
        (self - other).len()
    }

    #[inline(always)]
    pub fn squared_len(self) -> f64 {
        self.dot(self)
    }

    #[inline(always)]
    pub fn len(self) -> f64 {
        let squared_len = self.squared_len();
        squared_len.sqrt()
    }

    #[inline(always)]
    pub fn normalize(self: &Self) -> Vec3 {
        *self / self.len()
    }

    /// True when every component is so small the vector is effectively zero.
    #[inline(always)]
    pub fn near_zero(self) -> bool {
        const S: f64 = 1e-8;
        self.x.abs() < S && self.y.abs() < S && self.z.abs() < S
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(a.distance(b) < 1e-9, "{:?} != {:?}", a, b);
    }

    #[test]
    fn arithmetic() {
        assert_eq!(
            Vec3::new(1.0, 2.0, 3.0) + Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(2.0, 3.0, 4.0)
        );
        assert_eq!(
            Vec3::new(1.0, 2.0, 3.0) - Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(0.0, 1.0, 2.0)
        );
        assert_eq!(-Vec3::new(1.0, -2.0, 0.5), Vec3::new(-1.0, 2.0, -0.5));
        assert_eq!(2.0 * Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(Vec3::new(1.0, 2.0, 3.0) * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(
            Vec3::new(2.0, 2.0, 2.0) * Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(2.0, 4.0, 6.0)
        );
        assert_eq!(Vec3::new(2.0, 4.0, 6.0) / 2.0, Vec3::new(1.0, 2.0, 3.0));

        let mut v = Vec3::new(0.0, 0.0, 1.0);
        v += Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(v, Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn products_and_length() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::y_axis();
        assert_eq!(x.dot(y), 0.0);
        assert_eq!(x.cross(y), Vec3::z_axis());
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).len(), 5.0);
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).squared_len(), 25.0);
        assert_close(Vec3::new(0.0, 3.0, 4.0).normalize(), Vec3::new(0.0, 0.6, 0.8));
    }

    #[test]
    fn near_zero_only_for_tiny_components() {
        assert!(Vec3::new(1e-9, -1e-9, 0.0).near_zero());
        assert!(!Vec3::new(1e-9, 1e-3, 0.0).near_zero());
    }

    #[test]
    fn reflect_mirrors_about_normal() {
        let d = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(d.reflect(Vec3::y_axis()), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn refract_with_unit_ratio_keeps_direction() {
        let normal = Vec3::y_axis();
        for angle in [0.0_f64, 0.3, 0.7, 1.2, 1.5] {
            let d = Vec3::new(angle.sin(), -angle.cos(), 0.0);
            assert_close(d.refract(normal, 1.0), d);
        }
    }

    #[test]
    fn random_unit_vectors_have_unit_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = Vec3::random_unit_vector(&mut rng);
            assert!((v.len() - 1.0).abs() < 1e-9);
        }
    }
}
