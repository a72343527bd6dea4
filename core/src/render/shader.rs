//! Fragment shaders.
//!
//! A fragment shader computes the color of each individual pixel, or
//! fragment, drawn to the render target, and is the pipeline's extension
//! point. The vertex stage of this pipeline is fixed-function; see
//! [`transform`][super::transform].

use crate::math::Color4;

use super::raster::Frag;

/// A trait for fragment shaders, used to compute the color of fragments.
pub trait FragmentShader {
    /// Computes the color of `frag`. Returns `None` if the fragment
    /// should be discarded.
    fn shade_fragment(&self, frag: Frag) -> Option<Color4>;
}

impl<F, Out> FragmentShader for F
where
    F: Fn(Frag) -> Out,
    Out: Into<Option<Color4>>,
{
    fn shade_fragment(&self, frag: Frag) -> Option<Color4> {
        self(frag).into()
    }
}

/// A shader that colors every fragment with the same constant color.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Flat(pub Color4);

impl FragmentShader for Flat {
    fn shade_fragment(&self, _: Frag) -> Option<Color4> {
        Some(self.0)
    }
}
