//! Matrices and the transforms of the rendering pipeline.
//!
//! A [`Mat4<Src, Dst>`] is a 4×4 row-major matrix representing a transform
//! from basis `Src` to basis `Dst`. Transforms compose with [`compose`]
//! [Mat4::compose] and [`then`][Mat4::then], and the basis tags ensure at
//! compile time that only chainable transforms can be combined.
//!
//! Vectors are treated as columns: `translate` stores the offset in the
//! last column and `apply` computes `M · v`.

use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::ops::Range;

use crate::math::angle::Angle;
use crate::math::approx::ApproxEq;
use crate::math::vec::{Vec3, Vec4, vec4};

/// A 4×4 matrix mapping vectors from basis `Src` to basis `Dst`.
#[repr(transparent)]
pub struct Mat4<Src = (), Dst = ()>([[f32; 4]; 4], PhantomData<(Src, Dst)>);

impl<F, T> Mat4<F, T> {
    /// Returns a matrix with the given rows.
    pub const fn new(rows: [[f32; 4]; 4]) -> Self {
        Self(rows, PhantomData)
    }

    /// The identity matrix.
    pub const fn identity() -> Self {
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Returns the rows of `self`.
    pub const fn rows(&self) -> [[f32; 4]; 4] {
        self.0
    }

    /// Returns row `i` of `self` as a vector.
    #[inline]
    fn row_vec(&self, i: usize) -> Vec4 {
        Vec4::new(self.0[i])
    }

    /// Reinterprets `self` as a map from `F2` to `T2`.
    pub fn to<F2, T2>(self) -> Mat4<F2, T2> {
        Mat4(self.0, PhantomData)
    }

    /// Maps a homogeneous 4-vector from basis `F` to basis `T`.
    #[inline]
    pub fn apply(&self, v: &Vec4<F>) -> Vec4<T> {
        let u = v.to();
        vec4(
            self.row_vec(0).dot(&u),
            self.row_vec(1).dot(&u),
            self.row_vec(2).dot(&u),
            self.row_vec(3).dot(&u),
        )
    }

    /// Maps a 3-vector from basis `F` to basis `T`, treating it as a
    /// position with w = 1. The w component of the result is discarded;
    /// use [`apply`][Self::apply] where the perspective divide matters.
    #[inline]
    pub fn map(&self, v: &Vec3<F>) -> Vec3<T> {
        let v = vec4(v.x(), v.y(), v.z(), 1.0);
        let v: Vec4<T> = self.apply(&v);
        crate::math::vec::vec3(v.x(), v.y(), v.z())
    }

    /// Returns the composite transform of `self` and `other`, first
    /// applying `other` and then `self`.
    pub fn compose<G>(&self, other: &Mat4<G, F>) -> Mat4<G, T> {
        let mut res = [[0.0; 4]; 4];
        for (i, row) in res.iter_mut().enumerate() {
            for (j, elem) in row.iter_mut().enumerate() {
                for k in 0..4 {
                    *elem += self.0[i][k] * other.0[k][j];
                }
            }
        }
        Mat4::new(res)
    }

    /// Returns the composite transform of `self` and `other`, first
    /// applying `self` and then `other`.
    pub fn then<U>(&self, other: &Mat4<T, U>) -> Mat4<F, U> {
        other.compose(self)
    }
}

impl<F, T> Clone for Mat4<F, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F, T> Copy for Mat4<F, T> {}

impl<F, T> Default for Mat4<F, T> {
    /// Returns the identity matrix.
    fn default() -> Self {
        Self::identity()
    }
}

impl<F, T> PartialEq for Mat4<F, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<F, T> Debug for Mat4<F, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat4[")?;
        for row in &self.0 {
            writeln!(f, "    {row:6.2?}")?;
        }
        write!(f, "]")
    }
}

impl<F, T> ApproxEq<Self, f32> for Mat4<F, T> {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(r, s)| r.approx_eq_eps(s, rel_eps))
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

//
// Free functions
//

/// Returns a matrix applying a non-uniform scaling.
pub const fn scale(s: Vec3) -> Mat4 {
    let [x, y, z] = s.0;
    Mat4::new([
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix applying a translation.
pub const fn translate(t: Vec3) -> Mat4 {
    let [x, y, z] = t.0;
    Mat4::new([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix applying a rotation about the x axis.
///
/// A positive angle rotates the +y axis toward the +z axis.
pub fn rotate_x(a: Angle) -> Mat4 {
    let (sin, cos) = a.sin_cos();
    Mat4::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, cos, -sin, 0.0],
        [0.0, sin, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix applying a rotation about the y axis.
///
/// A positive angle rotates the +z axis toward the +x axis.
pub fn rotate_y(a: Angle) -> Mat4 {
    let (sin, cos) = a.sin_cos();
    Mat4::new([
        [cos, 0.0, sin, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-sin, 0.0, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix applying a rotation about the z axis.
///
/// A positive angle rotates the +x axis toward the +y axis.
pub fn rotate_z(a: Angle) -> Mat4 {
    let (sin, cos) = a.sin_cos();
    Mat4::new([
        [cos, -sin, 0.0, 0.0],
        [sin, cos, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a perspective projection matrix.
///
/// * `fov_y`: the vertical field of view.
/// * `aspect`: the width/height ratio of the viewport.
/// * `near_far`: the distances of the near and far clipping planes.
///
/// # Panics
/// If `fov_y` is not in (0°, 180°), if `aspect` is not positive, or
/// unless `0.0 < near < far`.
pub fn perspective<F, T>(
    fov_y: Angle,
    aspect: f32,
    near_far: Range<f32>,
) -> Mat4<F, T> {
    use crate::math::angle::degs;

    let Range { start: near, end: far } = near_far;
    assert!(
        degs(0.0) < fov_y && fov_y < degs(180.0),
        "field of view must be in (0°, 180°), was {fov_y:?}"
    );
    assert!(aspect > 0.0, "aspect ratio must be positive, was {aspect}");
    assert!(
        0.0 < near && near < far,
        "must have 0 < near < far, was {near}..{far}"
    );

    let focal = 1.0 / (fov_y * 0.5).tan();
    let [dp, dm] = [far + near, far - near];
    Mat4::new([
        [focal / aspect, 0.0, 0.0, 0.0],
        [0.0, focal, 0.0, 0.0],
        [0.0, 0.0, -dp / dm, -2.0 * far * near / dm],
        [0.0, 0.0, -1.0, 0.0],
    ])
}

/// Returns a matrix mapping from NDC to screen space.
///
/// The NDC square [-1, 1]² is mapped to a `w` × `h` pixel viewport with
/// the screen origin at the top left and y growing downward: NDC (-1, -1)
/// maps to (0, `h`) and NDC (1, 1) to (`w`, 0).
pub fn viewport<F, T>(w: u32, h: u32) -> Mat4<F, T> {
    let (hw, hh) = (w as f32 / 2.0, h as f32 / 2.0);
    Mat4::new([
        [hw, 0.0, 0.0, hw],
        [0.0, -hh, 0.0, hh],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}
