//! Linear algebra for the rendering pipeline.
//!
//! Includes [vectors][vec], [matrices][mat], [colors][color], and
//! [angles][angle], as well as approximate equality comparisons
//! ([approx]).
//!
//! The types here are more strongly typed than those of many similar math
//! libraries: vectors and matrices are tagged with the coordinate space
//! they operate in, so that many mixups that would otherwise only manifest
//! as graphical glitches are diagnosed at compile time.

pub mod angle;
pub mod approx;
pub mod color;
pub mod mat;
pub mod vec;

pub use angle::{Angle, degs, rads, turns};
pub use color::{Color4, rgb, rgba};
pub use mat::Mat4;
pub use vec::{Vec2, Vec3, Vec4, Vector, vec2, vec3, vec4};
