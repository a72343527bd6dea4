//! Render targets.
//!
//! The typical render target is a color buffer presented to a window, but
//! anything that accepts pixel writes can act as one, for example a
//! counting buffer in a test.

use crate::math::Color4;
use crate::util::buf::Buf2;

/// Trait for types that can be used as render targets.
///
/// A target accepts the shaded fragments of the pipeline. Fragments
/// outside the target's bounds are dropped, not errors; with no clipping
/// stage, off-screen geometry routinely rasterizes to out-of-bounds
/// fragments.
pub trait Target {
    /// The width and height of `self`, in pixels.
    fn dims(&self) -> (u32, u32);

    /// Writes a pixel, if `(x, y)` is within bounds. Returns whether the
    /// pixel was written.
    fn put_pixel(&mut self, x: i32, y: i32, color: Color4) -> bool;

    /// Fills the whole target with `color`.
    fn clear(&mut self, color: Color4);
}

/// A plain `0xAARRGGBB` color buffer.
impl Target for Buf2<u32> {
    fn dims(&self) -> (u32, u32) {
        Buf2::dims(self)
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Color4) -> bool {
        let (w, h) = Buf2::dims(self);
        if x < 0 || y < 0 || x as u32 >= w || y as u32 >= h {
            return false;
        }
        self[[x as u32, y as u32]] = color.to_argb_u32();
        true
    }

    fn clear(&mut self, color: Color4) {
        self.fill(color.to_argb_u32());
    }
}

#[cfg(test)]
mod tests {
    use crate::math::rgb;

    use super::*;

    #[test]
    fn in_bounds_write() {
        let mut buf = Buf2::<u32>::new((4, 4));
        assert!(buf.put_pixel(3, 0, rgb(0xFF, 0, 0)));
        assert_eq!(buf[[3, 0]], 0xFFFF0000);
        assert_eq!(buf[[0, 0]], 0);
    }

    #[test]
    fn out_of_bounds_write_is_dropped() {
        let mut buf = Buf2::<u32>::new((4, 4));
        assert!(!buf.put_pixel(-1, 0, rgb(0xFF, 0, 0)));
        assert!(!buf.put_pixel(0, 4, rgb(0xFF, 0, 0)));
        assert!(!buf.put_pixel(4, 0, rgb(0xFF, 0, 0)));
        assert!(buf.data().iter().all(|&px| px == 0));
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut buf = Buf2::<u32>::new((4, 4));
        buf.clear(rgb(0, 0, 0xFF));
        assert!(buf.data().iter().all(|&px| px == 0xFF0000FF));
    }
}
