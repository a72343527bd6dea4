//! Vectors tagged with the coordinate space they inhabit.
//!
//! Every vector carries a zero-sized *basis* tag as a type parameter.
//! A position in model space and a position in screen space are different
//! types, so feeding one into a transform meant for the other is a compile
//! error rather than a graphical glitch. The [`to`][Vector::to] method is
//! the explicit escape hatch for reinterpreting a vector in another basis.

use core::fmt::{Debug, Formatter};
use core::marker::PhantomData;
use core::ops::{Add, Index, Mul, Neg, Sub};

use crate::math::approx::ApproxEq;

/// A vector with representation `Repr`, tagged with the basis `B`.
///
/// `Repr` is an array `[f32; N]`; use the [`Vec2`], [`Vec3`], and [`Vec4`]
/// aliases rather than naming this type directly.
#[repr(transparent)]
pub struct Vector<Repr, B = ()>(pub Repr, PhantomData<B>);

/// A two-component vector in basis `B`.
pub type Vec2<B = ()> = Vector<[f32; 2], B>;
/// A three-component vector in basis `B`.
pub type Vec3<B = ()> = Vector<[f32; 3], B>;
/// A four-component (homogeneous) vector in basis `B`.
pub type Vec4<B = ()> = Vector<[f32; 4], B>;

/// Returns a new 2-vector with components `x` and `y`.
pub const fn vec2<B>(x: f32, y: f32) -> Vec2<B> {
    Vector([x, y], PhantomData)
}

/// Returns a new 3-vector with components `x`, `y`, and `z`.
pub const fn vec3<B>(x: f32, y: f32, z: f32) -> Vec3<B> {
    Vector([x, y, z], PhantomData)
}

/// Returns a new 4-vector with components `x`, `y`, `z`, and `w`.
pub const fn vec4<B>(x: f32, y: f32, z: f32, w: f32) -> Vec4<B> {
    Vector([x, y, z, w], PhantomData)
}

impl<R, B> Vector<R, B> {
    /// Returns a new vector with representation `repr`.
    pub const fn new(repr: R) -> Self {
        Self(repr, PhantomData)
    }

    /// Reinterprets `self` as a vector in basis `C`.
    ///
    /// Does not change the components, only what space the type system
    /// considers the vector to be in.
    pub fn to<C>(self) -> Vector<R, C> {
        Vector(self.0, PhantomData)
    }
}

impl<B, const N: usize> Vector<[f32; N], B> {
    /// The zero vector.
    pub const fn zero() -> Self {
        Self::new([0.0; N])
    }

    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        let mut res = 0.0;
        for i in 0..N {
            res += self.0[i] * other.0[i];
        }
        res
    }

    /// Returns the Euclidean length of `self`.
    #[inline]
    pub fn len(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Returns `self` scaled to unit length.
    ///
    /// The result is non-finite if `self` is the zero vector.
    #[inline]
    pub fn normalize(&self) -> Self {
        *self * self.len().recip()
    }
}

impl<B> Vec2<B> {
    #[inline]
    pub fn x(&self) -> f32 {
        self.0[0]
    }
    #[inline]
    pub fn y(&self) -> f32 {
        self.0[1]
    }
}

impl<B> Vec3<B> {
    #[inline]
    pub fn x(&self) -> f32 {
        self.0[0]
    }
    #[inline]
    pub fn y(&self) -> f32 {
        self.0[1]
    }
    #[inline]
    pub fn z(&self) -> f32 {
        self.0[2]
    }

    /// Returns the cross product of `self` and `other`.
    pub fn cross(&self, other: &Self) -> Self {
        let x = self.y() * other.z() - self.z() * other.y();
        let y = self.z() * other.x() - self.x() * other.z();
        let z = self.x() * other.y() - self.y() * other.x();
        vec3(x, y, z)
    }
}

impl<B> Vec4<B> {
    #[inline]
    pub fn x(&self) -> f32 {
        self.0[0]
    }
    #[inline]
    pub fn y(&self) -> f32 {
        self.0[1]
    }
    #[inline]
    pub fn z(&self) -> f32 {
        self.0[2]
    }
    #[inline]
    pub fn w(&self) -> f32 {
        self.0[3]
    }
}

//
// Operators
//

impl<B, const N: usize> Add for Vector<[f32; N], B> {
    type Output = Self;
    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        for i in 0..N {
            self.0[i] += rhs.0[i];
        }
        self
    }
}

impl<B, const N: usize> Sub for Vector<[f32; N], B> {
    type Output = Self;
    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        for i in 0..N {
            self.0[i] -= rhs.0[i];
        }
        self
    }
}

impl<B, const N: usize> Neg for Vector<[f32; N], B> {
    type Output = Self;
    #[inline]
    fn neg(mut self) -> Self {
        for c in &mut self.0 {
            *c = -*c;
        }
        self
    }
}

impl<B, const N: usize> Mul<f32> for Vector<[f32; N], B> {
    type Output = Self;
    #[inline]
    fn mul(mut self, rhs: f32) -> Self {
        for c in &mut self.0 {
            *c *= rhs;
        }
        self
    }
}

impl<B, const N: usize> Mul<Vector<[f32; N], B>> for f32 {
    type Output = Vector<[f32; N], B>;
    #[inline]
    fn mul(self, rhs: Vector<[f32; N], B>) -> Self::Output {
        rhs * self
    }
}

impl<B, const N: usize> Index<usize> for Vector<[f32; N], B> {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

//
// Foreign trait impls
//
// Written by hand so they hold for any basis tag, without requiring the
// tag itself to implement the trait.
//

impl<R: Clone, B> Clone for Vector<R, B> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<R: Copy, B> Copy for Vector<R, B> {}

impl<R: Default, B> Default for Vector<R, B> {
    fn default() -> Self {
        Self(R::default(), PhantomData)
    }
}

impl<R: PartialEq, B> PartialEq for Vector<R, B> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R, B> From<R> for Vector<R, B> {
    #[inline]
    fn from(repr: R) -> Self {
        Self(repr, PhantomData)
    }
}

impl<R: Debug, B: Debug + Default> Debug for Vector<R, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Vec<{:?}>{:?}", B::default(), self.0)
    }
}

impl<B, const N: usize> ApproxEq<Self, f32> for Vector<[f32; N], B> {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, rel_eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}
