//! Window frontend for creating simple applications with `rasterfall`.

use std::time::Duration;

use rf::render::Context;
use rf::util::buf::Buf2;

pub mod minifb;

/// Common window dimensions.
pub mod dims {
    /// The width and height of a standard VGA window.
    pub const VGA_640_480: (u32, u32) = (640, 480);
    /// The width and height of a standard SVGA window.
    pub const SVGA_800_600: (u32, u32) = (800, 600);
}

/// Per-frame state. The window run method passes an instance of `Frame`
/// to the callback function on every iteration of the main loop.
pub struct Frame<'a, Win> {
    /// Elapsed time since the start of the first frame.
    pub t: Duration,
    /// Elapsed time since the start of the previous frame.
    pub dt: Duration,
    /// Framebuffer in which to draw, one `0xAARRGGBB` pixel per element.
    pub buf: &'a mut Buf2<u32>,
    /// Reference to the window object.
    pub win: &'a mut Win,
    /// Rendering context and config.
    pub ctx: &'a mut Context,
}
