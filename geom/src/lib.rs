//! Mesh file loading for the `rasterfall` project.

pub mod obj;

pub use obj::{Error, load_obj, parse_obj};
