use std::error::Error;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};

use raytracer_rs::raytracing::camera::{CameraConfig, Shading};
use raytracer_rs::raytracing::core::Scene;
use raytracer_rs::raytracing::output::{sink_for_path, PixelSink, PpmWriter};
use raytracer_rs::raytracing::presets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Preset {
    /// nothing but the sky
    Empty,
    /// a single sphere in front of the camera
    Sphere,
    /// a sphere resting on the ground
    Ground,
    /// diffuse, glass and metal spheres side by side
    Materials,
}

impl Preset {
    fn build(self) -> Scene {
        match self {
            Preset::Empty => Scene::new(),
            Preset::Sphere => presets::single_sphere(),
            Preset::Ground => presets::sphere_on_ground(),
            Preset::Materials => presets::material_showcase(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// the built-in scene to render
    #[arg(long, value_enum, default_value_t = Preset::Ground)]
    scene: Preset,
    /// ratio of image width over height
    #[arg(long, default_value_t = 16.0 / 9.0)]
    aspect_ratio: f64,
    /// rendered image width in pixels
    #[arg(short, long, default_value_t = 400)]
    width: u32,
    /// the number of ray shooted per pixel
    #[arg(short, long, default_value_t = 1)]
    samples: u32,
    /// trace bounces off the materials up to this depth instead of showing the normals
    #[arg(long)]
    max_depth: Option<u32>,
    /// seed for the random generator, random when missing
    #[arg(long)]
    seed: Option<u64>,
    /// where the image is saved, `.ppm` is written as text and other
    /// extensions use the matching image format; stdout when missing
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// apply gamma correction to the final image
    #[arg(long, default_value = "false")]
    gamma_correction: bool,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let shading = match args.max_depth {
        Some(max_depth) => Shading::Scatter { max_depth },
        None => Shading::Normals,
    };
    let camera = CameraConfig {
        aspect_ratio: args.aspect_ratio,
        image_width: args.width,
        samples_per_pixel: args.samples,
        shading,
    }
    .initialize()?;

    let scene = args.scene.build();
    log::info!(
        "rendering {:?} scene ({} objects) at {}x{}, {} samples per pixel, {:?}",
        args.scene,
        scene.len(),
        camera.image_width(),
        camera.image_height(),
        args.samples,
        shading
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdout = io::stdout();
    let mut sink: Box<dyn PixelSink> = match &args.output {
        Some(path) => sink_for_path(path, args.gamma_correction)?,
        None => Box::new(PpmWriter::new(
            BufWriter::new(stdout.lock()),
            args.gamma_correction,
        )),
    };

    // measure time
    let start = Instant::now();
    camera.render(&scene, sink.as_mut(), &mut io::stderr(), &mut rng)?;
    let total_time = start.elapsed();

    match &args.output {
        Some(path) => log::info!("Rendered {} in {:?}", path.display(), total_time),
        None => log::info!("Rendered to stdout in {:?}", total_time),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::debug!("{:?}", args);
    run(args).map_err(|err| {
        log::error!("{}", err);
        err
    })
}
