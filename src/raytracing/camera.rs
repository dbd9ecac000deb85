use std::error::Error;
use std::fmt;
use std::io::Write;

use rand::Rng;

use super::core::RayHittable;
use super::math::{Color, Interval, Point3, Ray, Vec3};
use super::output::PixelSink;

const VIEWPORT_HEIGHT: f64 = 2.0;
const FOCAL_LENGTH: f64 = 1.0;

/// How a ray that hits something gets its color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shading {
    /// Visualizes the surface normal of the first hit, materials are ignored.
    Normals,
    /// Follows `Material::scatter` for at most `max_depth` bounces.
    Scatter { max_depth: u32 },
}

/// The user facing camera settings, turned into a [`Camera`] by
/// [`CameraConfig::initialize`].
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Ratio of image width over height
    pub aspect_ratio: f64,
    /// Rendered image width in pixels
    pub image_width: u32,
    pub samples_per_pixel: u32,
    pub shading: Shading,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.0,
            image_width: 100,
            samples_per_pixel: 1,
            shading: Shading::Normals,
        }
    }
}

#[derive(Debug)]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    fn new(message: &str) -> ConfigError {
        ConfigError {
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid camera configuration: {}", self.message)
    }
}

impl Error for ConfigError {}

impl CameraConfig {
    /// Validates the settings and derives the viewport geometry.
    pub fn initialize(&self) -> Result<Camera, ConfigError> {
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(ConfigError::new("aspect ratio must be a positive number"));
        }
        if self.image_width == 0 {
            return Err(ConfigError::new("image width must be at least one pixel"));
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::new("at least one sample per pixel is needed"));
        }

        let image_height = ((self.image_width as f64 / self.aspect_ratio) as u32).max(1);
        let center = Point3::zero();

        // the viewport keeps the real image ratio, not the requested one
        let viewport_width = VIEWPORT_HEIGHT * (self.image_width as f64 / image_height as f64);
        let viewport_u = Vec3::new(viewport_width, 0.0, 0.0);
        let viewport_v = Vec3::new(0.0, -VIEWPORT_HEIGHT, 0.0);

        let pixel_delta_u = viewport_u / self.image_width as f64;
        let pixel_delta_v = viewport_v / image_height as f64;

        let viewport_upper_left =
            center - Vec3::new(0.0, 0.0, FOCAL_LENGTH) - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel_00 = viewport_upper_left + (pixel_delta_u + pixel_delta_v) * 0.5;

        log::debug!(
            "camera initialized: {}x{} pixels, viewport {:.3}x{:.3}",
            self.image_width,
            image_height,
            viewport_width,
            VIEWPORT_HEIGHT
        );

        Ok(Camera {
            image_width: self.image_width,
            image_height,
            center,
            pixel_00,
            pixel_delta_u,
            pixel_delta_v,
            samples_per_pixel: self.samples_per_pixel,
            shading: self.shading,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Camera {
    image_width: u32,
    image_height: u32,
    center: Point3,
    // location of the center of the top-left pixel
    pixel_00: Point3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    samples_per_pixel: u32,
    shading: Shading,
}

impl Camera {
    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Create a ray from the camera center through the pixel in column `i` and row `j`.
    ///
    /// With a single sample the ray goes exactly through the pixel center,
    /// otherwise it is jittered inside the pixel square.
    pub fn get_ray<R: Rng + ?Sized>(&self, i: u32, j: u32, rng: &mut R) -> Ray {
        let (x_offset, y_offset): (f64, f64) = if self.samples_per_pixel > 1 {
            (rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5))
        } else {
            (0.0, 0.0)
        };
        let pixel_sample = self.pixel_00
            + self.pixel_delta_u * (i as f64 + x_offset)
            + self.pixel_delta_v * (j as f64 + y_offset);
        Ray::new(self.center, pixel_sample - self.center)
    }

    pub fn ray_color<R: Rng + ?Sized>(
        &self,
        ray: &Ray,
        world: &dyn RayHittable,
        rng: &mut R,
    ) -> Color {
        match self.shading {
            Shading::Normals => normal_color(ray, world),
            Shading::Scatter { max_depth } => scatter_color(ray, max_depth, world, rng),
        }
    }

    /// Renders `world` row by row into `sink`, reporting the remaining
    /// scanlines on `progress`.
    pub fn render<R: Rng + ?Sized>(
        &self,
        world: &dyn RayHittable,
        sink: &mut dyn PixelSink,
        progress: &mut dyn Write,
        rng: &mut R,
    ) -> Result<(), Box<dyn Error>> {
        sink.begin(self.image_width, self.image_height)?;

        for j in 0..self.image_height {
            write!(progress, "\rScanlines remaining: {} ", self.image_height - j)?;
            progress.flush()?;

            for i in 0..self.image_width {
                let mut pixel_color = Color::zero();
                for _ in 0..self.samples_per_pixel {
                    let ray = self.get_ray(i, j, rng);
                    pixel_color += self.ray_color(&ray, world, rng);
                }
                sink.write_pixel(pixel_color / self.samples_per_pixel as f64)?;
            }
        }

        sink.finish()?;
        writeln!(progress, "\rDone.       ")?;
        progress.flush()?;
        Ok(())
    }
}

fn normal_color(ray: &Ray, world: &dyn RayHittable) -> Color {
    if let Some(hit) = world.hit(ray, Interval::new(0.0, f64::INFINITY)) {
        return (hit.normal + Color::one()) * 0.5;
    }
    sky_color(ray)
}

fn scatter_color<R: Rng + ?Sized>(
    ray: &Ray,
    depth: u32,
    world: &dyn RayHittable,
    rng: &mut R,
) -> Color {
    // bounce limit reached, no more light is gathered
    if depth == 0 {
        return Color::zero();
    }

    // 0.001 avoids hitting the surface the ray just left (shadow acne)
    if let Some(hit) = world.hit(ray, Interval::new(0.001, f64::INFINITY)) {
        return match hit.material.scatter(ray, &hit, rng) {
            Some(scatter) => {
                scatter.attenuation * scatter_color(&scatter.scattered, depth - 1, world, rng)
            }
            None => Color::zero(),
        };
    }
    sky_color(ray)
}

/// Vertical white to light blue gradient.
fn sky_color(ray: &Ray) -> Color {
    let unit_direction = ray.direction.normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    Color::one() * (1.0 - a) + Color::new(0.5, 0.7, 1.0) * a
}
