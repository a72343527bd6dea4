//! Polygon meshes.

use core::fmt::{self, Debug, Formatter};

use crate::math::Vec3;
use crate::render::Model;

/// A single vertex reference within a [`Face`].
///
/// Holds indices into the mesh's attribute arrays. Only the position index
/// is consumed by the rendering pipeline; texture-coordinate and normal
/// indices are carried for completeness.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct VertRef {
    /// Index into the mesh's vertex positions.
    pub pos: usize,
    /// Index into the mesh's texture coordinates, if any.
    pub texco: Option<usize>,
    /// Index into the mesh's vertex normals, if any.
    pub normal: Option<usize>,
}

/// A polygonal face, an ordered sequence of vertex references.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Face(pub Vec<VertRef>);

/// A polygon mesh.
///
/// An object made of flat faces that typically form a contiguous surface,
/// with several faces sharing each vertex. The faces index into a vector
/// of unique vertex positions.
#[derive(Clone, Default)]
pub struct Mesh {
    /// The faces of the mesh.
    pub faces: Vec<Face>,
    /// The unique vertex positions of the mesh.
    pub verts: Vec<Vec3<Model>>,
}

impl VertRef {
    /// Returns a reference to position index `pos` only.
    pub const fn pos(pos: usize) -> Self {
        Self { pos, texco: None, normal: None }
    }
}

impl Mesh {
    /// Returns a new mesh with the given faces and vertex positions.
    ///
    /// # Panics
    /// If any position index in `faces` is out of bounds of `verts`.
    /// Meshes from untrusted input should be validated before this point;
    /// the OBJ loader reports out-of-range indices as parse errors.
    pub fn new(faces: Vec<Face>, verts: Vec<Vec3<Model>>) -> Self {
        for (i, face) in faces.iter().enumerate() {
            for r in &face.0 {
                assert!(
                    r.pos < verts.len(),
                    "position index out of bounds ({} >= {}) in face {}",
                    r.pos,
                    verts.len(),
                    i
                );
            }
        }
        Self { faces, verts }
    }

    /// Returns whether every face of `self` has exactly three vertices.
    pub fn is_triangulated(&self) -> bool {
        self.faces.iter().all(|f| f.0.len() == 3)
    }

    /// Expands the faces of `self` into a flat vertex array, in face
    /// order, ready for primitive assembly.
    ///
    /// Shared vertices are duplicated; the result has one entry per
    /// vertex reference.
    pub fn vertex_array(&self) -> Vec<Vec3<Model>> {
        self.faces
            .iter()
            .flat_map(|f| &f.0)
            .map(|r| self.verts[r.pos])
            .collect()
    }
}

impl Debug for Mesh {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mesh {{ faces: {}, verts: {} }}",
            self.faces.len(),
            self.verts.len()
        )
    }
}
