//! Core functionality of the `rasterfall` project.
//!
//! Includes a math library with vectors, matrices, colors, and angles;
//! basic geometry primitives; and a minimal software 3D rendering
//! pipeline with a fragment-shader extension point.

pub mod geom;
pub mod math;
pub mod render;
pub mod util;

pub mod prelude {
    //! The most commonly used items of the crate, in one place.

    pub use crate::math::{
        angle::{Angle, degs, rads, turns},
        color::{Color4, rgb, rgba},
        mat::{
            Mat4, perspective, rotate_x, rotate_y, rotate_z, scale,
            translate, viewport,
        },
        vec::{Vec2, Vec3, Vec4, Vector, vec2, vec3, vec4},
    };

    pub use crate::geom::{Face, Mesh, Tri, VertRef, tri};

    pub use crate::render::{
        Camera, Clip, Context, Error, Model, Ndc, Screen, Stats, Uniforms,
        View, World, assemble, model_matrix, render, transform,
        raster::Frag,
        shader::{Flat, FragmentShader},
        target::Target,
    };

    pub use crate::util::buf::Buf2;
}
