pub mod interval;
pub mod ray;
pub mod vec3;

pub use interval::*;
pub use ray::*;
pub use vec3::*;
