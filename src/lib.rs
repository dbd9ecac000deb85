//! A CPU ray tracer: spheres with diffuse, metal and glass materials seen
//! through a pinhole camera, written out as PPM or any format `image` supports.

pub mod raytracing;
