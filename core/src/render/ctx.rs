//! Rendering context and parameters.

use core::cell::RefCell;

use crate::math::Color4;

use super::Stats;

/// Context and parameters used by the renderer.
///
/// Replaces process-wide draw state with a value owned by the frame loop
/// and passed down the pipeline explicitly.
#[derive(Clone, Debug, Default)]
pub struct Context {
    /// The color with which the color buffer is filled at the start of
    /// each frame.
    pub color_clear: Color4,
    /// Collected rendering statistics. In a `RefCell` so that rendering
    /// only needs a shared borrow of the context.
    pub stats: RefCell<Stats>,
}

impl Context {
    /// Returns a context with the given clear color.
    pub fn new(color_clear: Color4) -> Self {
        Self { color_clear, ..Self::default() }
    }
}
