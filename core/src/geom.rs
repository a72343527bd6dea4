//! Basic geometric primitives.

pub mod mesh;

pub use mesh::{Face, Mesh, VertRef};

/// A triangle, defined by three vertices.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Tri<V>(pub [V; 3]);

/// Returns a new triangle with the given vertices.
pub const fn tri<V>(a: V, b: V, c: V) -> Tri<V> {
    Tri([a, b, c])
}
