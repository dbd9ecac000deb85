use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};

use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};

use super::math::{Color, Interval};

/// Receives the rendered image: first its size, then every pixel in
/// row-major order, top to bottom and left to right.
pub trait PixelSink {
    fn begin(&mut self, width: u32, height: u32) -> Result<(), Box<dyn Error>>;
    fn write_pixel(&mut self, color: Color) -> Result<(), Box<dyn Error>>;
    fn finish(&mut self) -> Result<(), Box<dyn Error>>;
}

// channels are clamped, never wrapped around
const INTENSITY: Interval = Interval {
    min: 0.000,
    max: 0.999,
};

fn gamma_correction(value: f64) -> f64 {
    if value > 0.0 {
        value.powf(1.0 / 2.2)
    } else {
        0.0
    }
}

fn to_byte(value: f64) -> u8 {
    (256.0 * INTENSITY.clamp(value)) as u8
}

impl From<Color> for image::Rgb<u8> {
    fn from(value: Color) -> Self {
        image::Rgb([to_byte(value.x), to_byte(value.y), to_byte(value.z)])
    }
}

fn encode(color: Color, gamma: bool) -> Rgb<u8> {
    if gamma {
        Color::new(
            gamma_correction(color.x),
            gamma_correction(color.y),
            gamma_correction(color.z),
        )
        .into()
    } else {
        color.into()
    }
}

/// Plain-text PPM (`P3`) written straight to a stream.
pub struct PpmWriter<W: Write> {
    out: W,
    gamma_correction: bool,
}

impl<W: Write> PpmWriter<W> {
    pub fn new(out: W, gamma_correction: bool) -> Self {
        Self {
            out,
            gamma_correction,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PixelSink for PpmWriter<W> {
    fn begin(&mut self, width: u32, height: u32) -> Result<(), Box<dyn Error>> {
        write!(self.out, "P3\n{} {}\n255\n", width, height)?;
        Ok(())
    }

    fn write_pixel(&mut self, color: Color) -> Result<(), Box<dyn Error>> {
        let Rgb([r, g, b]) = encode(color, self.gamma_correction);
        writeln!(self.out, "{} {} {}", r, g, b)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Box<dyn Error>> {
        self.out.flush()?;
        Ok(())
    }
}

/// Collects the pixels in memory and saves them with the format implied by
/// the file extension.
pub struct ImageFile {
    path: PathBuf,
    buffer: RgbImage,
    next_pixel: u32,
    gamma_correction: bool,
}

impl ImageFile {
    pub fn new(path: impl AsRef<Path>, gamma_correction: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            buffer: ImageBuffer::new(0, 0),
            next_pixel: 0,
            gamma_correction,
        }
    }

    pub fn buffer(&self) -> &RgbImage {
        &self.buffer
    }
}

impl PixelSink for ImageFile {
    fn begin(&mut self, width: u32, height: u32) -> Result<(), Box<dyn Error>> {
        self.buffer = ImageBuffer::new(width, height);
        self.next_pixel = 0;
        Ok(())
    }

    fn write_pixel(&mut self, color: Color) -> Result<(), Box<dyn Error>> {
        let width = self.buffer.width();
        if width == 0 || self.next_pixel >= width * self.buffer.height() {
            return Err(Box::from("pixel written outside of the image"));
        }
        let (x, y) = (self.next_pixel % width, self.next_pixel / width);
        self.buffer.put_pixel(x, y, encode(color, self.gamma_correction));
        self.next_pixel += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Box<dyn Error>> {
        self.buffer.save(&self.path)?;
        Ok(())
    }
}

/// Picks the sink for `path`: `.ppm` files are streamed as text, any other
/// extension goes through the `image` encoders.
///
/// Unknown or read-only formats are rejected here, before anything is rendered.
pub fn sink_for_path(
    path: &Path,
    gamma_correction: bool,
) -> Result<Box<dyn PixelSink>, Box<dyn Error>> {
    let is_ppm = path
        .extension()
        .map_or(true, |extension| extension.eq_ignore_ascii_case("ppm"));
    if is_ppm {
        let file = std::fs::File::create(path)?;
        Ok(Box::new(PpmWriter::new(
            std::io::BufWriter::new(file),
            gamma_correction,
        )))
    } else {
        let format = ImageFormat::from_path(path)?;
        if !format.writing_enabled() {
            return Err(format!("cannot encode {:?} images", format).into());
        }
        Ok(Box::new(ImageFile::new(path, gamma_correction)))
    }
}
