//! Translation of triangles into discrete pixels.
//!
//! Rasterization walks the integer bounding box of a screen-space
//! triangle and samples each pixel at its center. A pixel is covered if
//! its center's barycentric coordinates with respect to the triangle are
//! all non-negative, that is, if the center lies inside the triangle or
//! exactly on an edge. Each covered pixel yields a [`Frag`].
//!
//! The coverage rule is inclusive on every edge, so a pixel center lying
//! exactly on an edge shared by two triangles is emitted by both. For the
//! flat shading this pipeline does, the overdraw is invisible; a rule
//! such as top-left would be needed to make coverage exclusive.

use core::fmt::{self, Debug, Formatter};

use crate::geom::Tri;
use crate::math::Vec3;
use crate::render::Screen;

/// Signed areas smaller than this in magnitude count as degenerate.
const AREA_EPSILON: f32 = f32::EPSILON;

/// A fragment, or a candidate pixel, generated by the rasterizer.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Frag {
    /// The pixel coordinates of the fragment.
    pub pos: [i32; 2],
}

impl Frag {
    /// The x pixel coordinate of `self`.
    #[inline]
    pub const fn x(&self) -> i32 {
        self.pos[0]
    }
    /// The y pixel coordinate of `self`.
    #[inline]
    pub const fn y(&self) -> i32 {
        self.pos[1]
    }
}

impl Debug for Frag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Frag({}, {})", self.x(), self.y())
    }
}

/// Twice the signed area of the triangle (`a`, `b`, `p`).
///
/// Positive if the vertices wind counterclockwise in a y-up frame.
#[inline]
fn edge(a: &Vec3<Screen>, b: &Vec3<Screen>, p: [f32; 2]) -> f32 {
    (b.x() - a.x()) * (p[1] - a.y()) - (b.y() - a.y()) * (p[0] - a.x())
}

/// Rasterizes a screen-space triangle, invoking `frag_fn` for every
/// covered pixel.
///
/// Pixels are sampled at their centers, (x + 0.5, y + 0.5). Barycentric
/// weights are normalized by the triangle's signed area, so coverage does
/// not depend on the winding order of the vertices. A triangle with a
/// (near-)zero area emits no fragments. The order in which fragments are
/// emitted is unspecified.
pub fn tri_fill<F>(Tri([a, b, c]): Tri<Vec3<Screen>>, mut frag_fn: F)
where
    F: FnMut(Frag),
{
    let area = edge(&a, &b, [c.x(), c.y()]);
    if area.abs() <= AREA_EPSILON {
        return;
    }

    let min_x = a.x().min(b.x()).min(c.x()).floor() as i32;
    let min_y = a.y().min(b.y()).min(c.y()).floor() as i32;
    let max_x = a.x().max(b.x()).max(c.x()).ceil() as i32;
    let max_y = a.y().max(b.y()).max(c.y()).ceil() as i32;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = [x as f32 + 0.5, y as f32 + 0.5];

            let alpha = edge(&b, &c, p) / area;
            let beta = edge(&c, &a, p) / area;
            let gamma = edge(&a, &b, p) / area;

            if alpha >= 0.0 && beta >= 0.0 && gamma >= 0.0 {
                frag_fn(Frag { pos: [x, y] });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::geom::tri;
    use crate::math::vec3;
    use crate::util::buf::Buf2;

    use super::*;

    fn fill_to_vec(t: Tri<Vec3<Screen>>) -> Vec<[i32; 2]> {
        let mut frags = vec![];
        tri_fill(t, |f| frags.push(f.pos));
        frags.sort();
        frags
    }

    fn right_tri() -> Tri<Vec3<Screen>> {
        tri(
            vec3(0.0, 0.0, 0.0),
            vec3(4.0, 0.0, 0.0),
            vec3(0.0, 4.0, 0.0),
        )
    }

    #[test]
    fn axis_aligned_right_triangle() {
        // Pixel centers (x+0.5, y+0.5) inside x + y <= 4 are exactly
        // those with x + y <= 3.
        let mut expect = vec![];
        for x in 0..=3 {
            for y in 0..=3 - x {
                expect.push([x, y]);
            }
        }
        expect.sort();

        assert_eq!(fill_to_vec(right_tri()), expect);
    }

    #[test]
    fn winding_does_not_affect_coverage() {
        let Tri([a, b, c]) = right_tri();
        assert_eq!(fill_to_vec(tri(a, c, b)), fill_to_vec(right_tri()));
    }

    #[test]
    fn triangle_with_negative_coords() {
        let t = tri(
            vec3(-2.0, -2.0, 0.0),
            vec3(2.0, -2.0, 0.0),
            vec3(-2.0, 2.0, 0.0),
        );
        // Covered centers satisfy x >= -2, y >= -2, x + y <= -1.
        let mut expect = vec![];
        for x in -2..=1 {
            for y in -2..=-1 - x {
                expect.push([x, y]);
            }
        }
        expect.sort();
        assert_eq!(fill_to_vec(t), expect);
    }

    #[test]
    fn degenerate_point_triangle_emits_nothing() {
        let v = vec3(1.5, 2.5, 0.0);
        assert!(fill_to_vec(tri(v, v, v)).is_empty());
    }

    #[test]
    fn collinear_triangle_emits_nothing() {
        let t = tri(
            vec3(0.0, 0.0, 0.0),
            vec3(2.0, 2.0, 0.0),
            vec3(4.0, 4.0, 0.0),
        );
        assert!(fill_to_vec(t).is_empty());
    }

    #[test]
    fn shared_edge_is_covered_by_both_triangles() {
        // Two triangles splitting a square along the diagonal x + y = 4.
        // The inclusive coverage rule draws the diagonal pixels twice.
        let upper = tri(
            vec3(4.0, 0.0, 0.0),
            vec3(0.0, 4.0, 0.0),
            vec3(4.0, 4.0, 0.0),
        );

        let mut buf = Buf2::<i32>::new((5, 5));
        let mut count = |f: Frag| buf[[f.x() as u32, f.y() as u32]] += 1;

        tri_fill(right_tri(), &mut count);
        tri_fill(upper, &mut count);

        let rows: Vec<String> = buf
            .rows()
            .map(|r| r.iter().map(i32::to_string).collect())
            .collect();

        assert_eq!(rows[0], "11120");
        assert_eq!(rows[1], "11210");
        assert_eq!(rows[2], "12110");
        assert_eq!(rows[3], "21110");
        assert_eq!(rows[4], "00000");
    }
}
