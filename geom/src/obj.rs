//! Loading Wavefront OBJ meshes.
//!
//! Supports the subset of the format needed for positions-only rendering:
//! `v` records define vertex positions and `f` records define faces as
//! lists of `pos[/texco[/normal]]` reference tuples. Texture-coordinate
//! and normal indices are parsed and carried on the mesh but not
//! otherwise consumed. Comments, blank lines, and unrecognized record
//! types (`vt`, `vn`, `g`, `s`, `usemtl`, ...) are skipped.
//!
//! Indices in the file are 1-based; the returned [`Mesh`] uses 0-based
//! indices throughout.

use std::fs;
use std::io;
use std::path::Path;

use rf::geom::{Face, Mesh, VertRef};
use rf::math::{Vec3, vec3};
use rf::render::Model;

/// Errors raised while loading a mesh file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Could not read the file at all.
    #[error("could not read {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    /// The file contents are not valid OBJ.
    #[error("parse error on line {line}: {kind}")]
    Parse { line: usize, kind: ErrorKind },
}

/// The different ways an OBJ record can be malformed.
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    #[error("too few coordinates for a vertex")]
    TooFewCoords,
    #[error("bad coordinate value {0:?}")]
    BadCoord(String),
    #[error("a face needs at least three vertices")]
    TooFewFaceVerts,
    #[error("bad vertex index {0:?}")]
    BadIndex(String),
    #[error("vertex index {index} out of range, mesh has {count} vertices")]
    IndexOutOfRange { index: usize, count: usize },
}

fn parse_error(line: usize, kind: ErrorKind) -> Error {
    Error::Parse { line, kind }
}

/// Reads and parses the OBJ file at `path`.
pub fn load_obj(path: impl AsRef<Path>) -> Result<Mesh, Error> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_obj(&text)
}

/// Parses a mesh from OBJ-format text.
pub fn parse_obj(text: &str) -> Result<Mesh, Error> {
    let mut verts: Vec<Vec3<Model>> = vec![];
    // Faces with the line they came from, for error reporting.
    let mut faces: Vec<(usize, Face)> = vec![];

    for (line, rec) in text.lines().enumerate() {
        let line = line + 1;
        let mut tokens = rec.split_whitespace();

        match tokens.next() {
            Some("v") => verts.push(parse_position(tokens, line)?),
            Some("f") => faces.push((line, parse_face(tokens, line)?)),
            // Comments and record types irrelevant to positions-only
            // rendering.
            _ => {}
        }
    }

    for (line, face) in &faces {
        for r in &face.0 {
            if r.pos >= verts.len() {
                return Err(parse_error(
                    *line,
                    ErrorKind::IndexOutOfRange {
                        index: r.pos + 1,
                        count: verts.len(),
                    },
                ));
            }
        }
    }

    log::debug!(
        "parsed obj mesh: {} vertices, {} faces",
        verts.len(),
        faces.len()
    );
    let faces = faces.into_iter().map(|(_, f)| f).collect();
    Ok(Mesh::new(faces, verts))
}

fn parse_position<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<Vec3<Model>, Error> {
    let mut coord = || {
        let tok = tokens
            .next()
            .ok_or(parse_error(line, ErrorKind::TooFewCoords))?;
        tok.parse::<f32>()
            .map_err(|_| parse_error(line, ErrorKind::BadCoord(tok.into())))
    };
    // A fourth (w) coordinate, if present, is ignored.
    Ok(vec3(coord()?, coord()?, coord()?))
}

fn parse_face<'a>(
    tokens: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<Face, Error> {
    let refs: Vec<VertRef> = tokens
        .map(|tok| parse_vert_ref(tok, line))
        .collect::<Result<_, _>>()?;
    if refs.len() < 3 {
        return Err(parse_error(line, ErrorKind::TooFewFaceVerts));
    }
    Ok(Face(refs))
}

fn parse_vert_ref(tok: &str, line: usize) -> Result<VertRef, Error> {
    let mut parts = tok.splitn(3, '/');

    let index = |part: Option<&str>| match part {
        None | Some("") => Ok(None),
        Some(p) => match p.parse::<usize>() {
            // 1-based in the file, 0-based in the mesh.
            Ok(i) if i > 0 => Ok(Some(i - 1)),
            _ => Err(parse_error(line, ErrorKind::BadIndex(tok.into()))),
        },
    };

    let pos = index(parts.next())?
        .ok_or(parse_error(line, ErrorKind::BadIndex(tok.into())))?;
    let texco = index(parts.next())?;
    let normal = index(parts.next())?;
    Ok(VertRef { pos, texco, normal })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(res: Result<Mesh, Error>) -> (usize, ErrorKind) {
        match res {
            Err(Error::Parse { line, kind }) => (line, kind),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn triangles_with_comments() {
        let mesh = parse_obj(
            "# a square from two triangles\n\
             v 0.0 0.0 0.0\n\
             v 1.0 0.0 0.0\n\
             v 1.0 1.0 0.0\n\
             v 0.0 1.0 0.0\n\
             \n\
             f 1 2 3\n\
             f 1 3 4\n",
        )
        .unwrap();

        assert_eq!(mesh.verts.len(), 4);
        assert_eq!(mesh.faces.len(), 2);
        assert!(mesh.is_triangulated());
        assert_eq!(mesh.verts[2], vec3(1.0, 1.0, 0.0));
        assert_eq!(mesh.faces[1].0[2], VertRef::pos(3));
        assert_eq!(mesh.vertex_array().len(), 6);
    }

    #[test]
    fn slash_separated_refs() {
        let mesh = parse_obj(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\n\
             vt 0 0\n\
             vn 0 0 1\n\
             f 1/1/1 2/1/1 3//1\n",
        )
        .unwrap();

        let refs = &mesh.faces[0].0;
        assert_eq!(
            refs[0],
            VertRef { pos: 0, texco: Some(0), normal: Some(0) }
        );
        assert_eq!(refs[2], VertRef { pos: 2, texco: None, normal: Some(0) });
    }

    #[test]
    fn quad_face_accepted() {
        let mesh = parse_obj(
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n",
        )
        .unwrap();
        assert!(!mesh.is_triangulated());
        assert_eq!(mesh.faces[0].0.len(), 4);
    }

    #[test]
    fn unknown_records_skipped() {
        let mesh = parse_obj(
            "usemtl wood\ns off\ng thing\n\
             v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n",
        )
        .unwrap();
        assert_eq!(mesh.faces.len(), 1);
    }

    #[test]
    fn bad_coordinate() {
        let res = parse_obj("v 0 zero 0\n");
        assert_eq!(kind_of(res), (1, ErrorKind::BadCoord("zero".into())));
    }

    #[test]
    fn too_few_coordinates() {
        let res = parse_obj("v 1.0 2.0\n");
        assert_eq!(kind_of(res), (1, ErrorKind::TooFewCoords));
    }

    #[test]
    fn bad_index() {
        let res = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 x\n");
        assert_eq!(kind_of(res), (4, ErrorKind::BadIndex("x".into())));

        // Indices are 1-based; 0 is never valid.
        let res = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n");
        assert_eq!(kind_of(res), (4, ErrorKind::BadIndex("0".into())));
    }

    #[test]
    fn too_few_face_verts() {
        let res = parse_obj("v 0 0 0\nv 1 0 0\nf 1 2\n");
        assert_eq!(kind_of(res), (3, ErrorKind::TooFewFaceVerts));
    }

    #[test]
    fn index_out_of_range() {
        let res = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 4\n");
        assert_eq!(
            kind_of(res),
            (4, ErrorKind::IndexOutOfRange { index: 4, count: 3 })
        );
    }

    #[test]
    fn missing_file() {
        let res = load_obj("does/not/exist.obj");
        assert!(matches!(res, Err(Error::Io { .. })));
    }
}
