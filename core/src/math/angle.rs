//! Angular quantities with explicit units.
//!
//! Using a newtype for angles keeps degrees and radians from being mixed
//! up: construct with [`degs`], [`rads`], or [`turns`], and convert back
//! with the corresponding `to_*` methods.

use core::f32::consts::{PI, TAU};
use core::fmt::{self, Debug, Display};
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::math::approx::ApproxEq;

/// An angle, stored internally in radians.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Angle(f32);

/// Returns an angle of `a` radians.
pub const fn rads(a: f32) -> Angle {
    Angle(a)
}

/// Returns an angle of `a` degrees.
pub fn degs(a: f32) -> Angle {
    Angle(a * (PI / 180.0))
}

/// Returns an angle of `a` turns (full circles).
pub fn turns(a: f32) -> Angle {
    Angle(a * TAU)
}

impl Angle {
    /// A zero angle.
    pub const ZERO: Self = Self(0.0);
    /// A quarter turn, 90°.
    pub const RIGHT: Self = Self(PI / 2.0);
    /// A half turn, 180°.
    pub const STRAIGHT: Self = Self(PI);
    /// A full turn, 360°.
    pub const FULL: Self = Self(TAU);

    /// Returns the value of `self` in radians.
    pub const fn to_rads(self) -> f32 {
        self.0
    }
    /// Returns the value of `self` in degrees.
    pub fn to_degs(self) -> f32 {
        self.0 * (180.0 / PI)
    }
    /// Returns the value of `self` in turns.
    pub fn to_turns(self) -> f32 {
        self.0 / TAU
    }

    /// Returns the sine of `self`.
    pub fn sin(self) -> f32 {
        self.0.sin()
    }
    /// Returns the cosine of `self`.
    pub fn cos(self) -> f32 {
        self.0.cos()
    }
    /// Returns the sine and cosine of `self`.
    pub fn sin_cos(self) -> (f32, f32) {
        self.0.sin_cos()
    }
    /// Returns the tangent of `self`.
    pub fn tan(self) -> f32 {
        self.0.tan()
    }
}

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f32> for Angle {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<Angle> for f32 {
    type Output = Angle;
    fn mul(self, rhs: Angle) -> Angle {
        rhs * self
    }
}

impl Div<f32> for Angle {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self(self.0 / rhs)
    }
}

impl Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Angle({:?}°)", self.to_degs())
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.to_degs())
    }
}

impl ApproxEq<Self, f32> for Angle {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, rel_eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn unit_conversions() {
        assert_approx_eq!(degs(180.0).to_rads(), PI);
        assert_approx_eq!(rads(PI).to_degs(), 180.0);
        assert_approx_eq!(turns(0.25).to_degs(), 90.0);
        assert_approx_eq!(degs(360.0).to_turns(), 1.0);
    }

    #[test]
    fn consts() {
        assert_approx_eq!(Angle::RIGHT, degs(90.0));
        assert_approx_eq!(Angle::STRAIGHT, degs(180.0));
        assert_approx_eq!(Angle::FULL, turns(1.0));
        assert_eq!(Angle::ZERO, Angle::default());
    }

    #[test]
    fn arithmetic() {
        assert_approx_eq!(degs(45.0) + degs(45.0), degs(90.0));
        assert_approx_eq!(degs(90.0) - degs(45.0), degs(45.0));
        assert_approx_eq!(degs(45.0) * 2.0, degs(90.0));
        assert_approx_eq!(degs(90.0) / 2.0, degs(45.0));
        assert_eq!(-degs(45.0), degs(-45.0));
    }

    #[test]
    fn trigonometry() {
        assert_approx_eq!(degs(90.0).sin(), 1.0);
        assert_approx_eq!(degs(180.0).cos(), -1.0);
        assert_approx_eq!(degs(45.0).tan(), 1.0);
        let (sin, cos) = degs(0.0).sin_cos();
        assert_eq!((sin, cos), (0.0, 1.0));
    }

    #[test]
    fn ordering() {
        assert!(degs(45.0) < degs(90.0));
        assert!(degs(0.0) < turns(0.1));
    }
}
