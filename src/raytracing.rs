pub mod camera;
pub mod core;
pub mod material;
pub mod math;
pub mod output;
pub mod presets;
pub mod sphere;

pub use math::*;
