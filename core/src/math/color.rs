//! Colors as 8-bit RGBA quadruplets.

use core::fmt::{self, Debug, Formatter};

/// An RGBA color with 8 bits per channel.
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct Color4(pub [u8; 4]);

/// Returns a new color with the given component values.
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color4 {
    Color4([r, g, b, a])
}

/// Returns a new fully opaque color with the given component values.
pub const fn rgb(r: u8, g: u8, b: u8) -> Color4 {
    rgba(r, g, b, 0xFF)
}

impl Color4 {
    /// The red component of `self`.
    #[inline]
    pub const fn r(&self) -> u8 {
        self.0[0]
    }
    /// The green component of `self`.
    #[inline]
    pub const fn g(&self) -> u8 {
        self.0[1]
    }
    /// The blue component of `self`.
    #[inline]
    pub const fn b(&self) -> u8 {
        self.0[2]
    }
    /// The alpha component of `self`.
    #[inline]
    pub const fn a(&self) -> u8 {
        self.0[3]
    }

    /// Returns `self` packed into a `u32` in `0xAARRGGBB` order, the
    /// layout framebuffers expect.
    #[inline]
    pub const fn to_argb_u32(&self) -> u32 {
        let [r, g, b, a] = self.0;
        (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
    }
}

impl Debug for Color4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "rgba({r}, {g}, {b}, {a})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_accessors() {
        let c = rgba(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.r(), 0x11);
        assert_eq!(c.g(), 0x22);
        assert_eq!(c.b(), 0x33);
        assert_eq!(c.a(), 0x44);
    }

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(rgb(1, 2, 3), rgba(1, 2, 3, 0xFF));
    }

    #[test]
    fn argb_packing() {
        assert_eq!(rgba(0x11, 0x22, 0x33, 0x44).to_argb_u32(), 0x44112233);
        assert_eq!(rgb(0xFF, 0xFF, 0xFF).to_argb_u32(), 0xFFFFFFFF);
        assert_eq!(rgb(0, 0, 0).to_argb_u32(), 0xFF000000);
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", rgb(1, 2, 3)), "rgba(1, 2, 3, 255)");
    }
}
