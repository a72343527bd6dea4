//! Turning 3D geometry into raster images.
//!
//! This module is the core rendering pipeline: it contains code for
//! [transforming][transform] vertices through the coordinate spaces of
//! the pipeline, [assembling][assemble] them into triangles,
//! [rasterizing][raster] the triangles, and [shading][shader] and
//! [outputting][target] the resulting fragments.

use crate::geom::Tri;
use crate::math::{Mat4, Vec3, vec4};

use raster::tri_fill;
use shader::FragmentShader;
use target::Target;

pub mod cam;
pub mod ctx;
pub mod raster;
pub mod shader;
pub mod stats;
pub mod target;

pub use cam::{Camera, model_matrix};
pub use ctx::Context;
pub use stats::{Stats, Throughput};

//
// Coordinate spaces
//
// Zero-sized basis tags for `Vector` and `Mat4`. A vertex travels
// Model → World → View → Clip → Ndc → Screen through the pipeline.
//

/// Object-local model space.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Model;
/// Shared world space.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct World;
/// Camera-relative view space.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct View;
/// Projected homogeneous clip space.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Clip;
/// Normalized device coordinates, the [-1, 1]² square after the
/// perspective divide.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Ndc;
/// Pixel coordinates, origin at the top left, y growing downward.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Screen;

/// Below this w magnitude the perspective divide is considered undefined
/// and the vertex unrenderable.
const W_EPSILON: f32 = 1e-6;

/// The per-draw-call transform matrices, immutable during a pass.
#[derive(Copy, Clone, Debug)]
pub struct Uniforms {
    pub model: Mat4<Model, World>,
    pub view: Mat4<World, View>,
    pub projection: Mat4<View, Clip>,
    pub viewport: Mat4<Ndc, Screen>,
}

impl Uniforms {
    /// Returns uniforms with every matrix the identity.
    pub fn identity() -> Self {
        Self {
            model: Mat4::identity(),
            view: Mat4::identity(),
            projection: Mat4::identity(),
            viewport: Mat4::identity(),
        }
    }
}

/// Errors raised by the rendering pipeline.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The vertex array cannot be grouped into whole triangles.
    #[error("vertex count {0} is not a multiple of 3")]
    PrimitiveCount(usize),
}

/// Transforms a model-space vertex to screen space.
///
/// Applies the model, view, and projection matrices, performs the
/// perspective divide, and maps the result to the viewport. Returns
/// `None` if the vertex lands too close to the projection plane for the
/// divide to be meaningful; callers skip the primitives of such vertices.
pub fn transform(v: Vec3<Model>, uni: &Uniforms) -> Option<Vec3<Screen>> {
    let view = uni.view.map(&uni.model.map(&v));
    let clip = uni
        .projection
        .apply(&vec4(view.x(), view.y(), view.z(), 1.0));

    let w = clip.w();
    if w.abs() <= W_EPSILON {
        return None;
    }
    let ndc = crate::math::vec3::<Ndc>(clip.x() / w, clip.y() / w, clip.z() / w);
    Some(uni.viewport.map(&ndc))
}

/// Groups a flat vertex array into triangles, three consecutive vertices
/// each, preserving order.
///
/// Returns [`Error::PrimitiveCount`] if the length of `verts` is not a
/// multiple of three.
pub fn assemble<V: Copy>(verts: &[V]) -> Result<Vec<Tri<V>>, Error> {
    if verts.len() % 3 != 0 {
        return Err(Error::PrimitiveCount(verts.len()));
    }
    Ok(verts
        .chunks_exact(3)
        .map(|c| Tri([c[0], c[1], c[2]]))
        .collect())
}

/// Renders a model-space vertex array into `target`.
///
/// Runs the full pipeline: vertex transform, primitive assembly,
/// rasterization, fragment shading, and target output. Triangles with an
/// unrenderable vertex or a degenerate screen-space area are skipped and
/// counted in `ctx.stats`; they never fail the pass.
pub fn render<Shd, Tgt>(
    verts: &[Vec3<Model>],
    shader: &Shd,
    uni: &Uniforms,
    target: &mut Tgt,
    ctx: &Context,
) -> Result<(), Error>
where
    Shd: FragmentShader,
    Tgt: Target,
{
    let screen: Vec<Option<Vec3<Screen>>> =
        verts.iter().map(|&v| transform(v, uni)).collect();

    let tris = assemble(&screen)?;

    let mut guard = ctx.stats.borrow_mut();
    let stats = &mut *guard;
    stats.calls += 1;
    stats.verts.i += verts.len();
    stats.tris.i += tris.len();

    for tri in tris {
        let Tri([Some(a), Some(b), Some(c)]) = tri else {
            continue;
        };
        stats.tris.o += 1;

        tri_fill(Tri([a, b, c]), |frag| {
            stats.frags.i += 1;
            if let Some(color) = shader.shade_fragment(frag) {
                if target.put_pixel(frag.x(), frag.y(), color) {
                    stats.frags.o += 1;
                }
            }
        });
    }
    Ok(())
}
