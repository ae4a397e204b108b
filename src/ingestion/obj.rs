//! Line-oriented OBJ parser.
//!
//! Only `v` and `f` records are consumed.  Texture coordinates,
//! normals, groups and material directives in the file are skipped:
//! the geometry passes recompute UVs and normals from positions, so
//! file-supplied values are never trusted.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{MeshViewError, Result};
use crate::types::{Mesh, Vertex};

/// Parse an OBJ file into a mesh.
///
/// Quad faces `(a, b, c, d)` are split along the fixed `a-c` diagonal
/// into `(a, b, c)` and `(a, c, d)`; the input must supply convex,
/// planar quads for correct results.  Face lines with any other index
/// count are ignored.  Zero, negative (relative-convention) and
/// out-of-range indices are rejected.
pub fn parse_obj(path: &Path) -> Result<Mesh> {
    let text = fs::read_to_string(path).map_err(|e| {
        MeshViewError::Input(format!("Failed to open {}: {e}", path.display()))
    })?;

    let mut mesh = Mesh::default();

    for (line_no, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let position = parse_position(tokens, line_no + 1)?;
                mesh.vertices.push(Vertex::at(position));
            }
            Some("f") => {
                let mut face = Vec::with_capacity(4);
                for token in tokens {
                    face.push(parse_face_index(token, line_no + 1)?);
                }
                match face.len() {
                    3 => mesh.indices.extend_from_slice(&face),
                    4 => {
                        // Fixed diagonal split: (a,b,c) then (a,c,d).
                        mesh.indices
                            .extend_from_slice(&[face[0], face[1], face[2]]);
                        mesh.indices
                            .extend_from_slice(&[face[0], face[2], face[3]]);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }

    if mesh.is_empty() {
        return Err(MeshViewError::Geometry(format!(
            "{}: no vertices or faces found",
            path.display()
        )));
    }

    validate_indices(&mesh, path)?;

    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "Parsed OBJ geometry"
    );

    Ok(mesh)
}

fn parse_position<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
    line_no: usize,
) -> Result<[f32; 3]> {
    let mut out = [0.0_f32; 3];
    for slot in &mut out {
        let token = tokens.next().ok_or_else(|| {
            MeshViewError::Input(format!("line {line_no}: vertex record needs three numbers"))
        })?;
        *slot = token.parse().map_err(|_| {
            MeshViewError::Input(format!("line {line_no}: invalid vertex component {token:?}"))
        })?;
    }
    Ok(out)
}

/// Convert one face token to a 0-based vertex index.
///
/// `v/vt/vn` reference triples are accepted, but only the leading
/// vertex field is used.  OBJ's negative relative indices are not
/// supported and rejected outright.
fn parse_face_index(token: &str, line_no: usize) -> Result<u32> {
    let field = token.split('/').next().unwrap_or(token);
    let index: i64 = field.parse().map_err(|_| {
        MeshViewError::Input(format!("line {line_no}: invalid face index {token:?}"))
    })?;

    if index <= 0 {
        return Err(MeshViewError::Input(format!(
            "line {line_no}: face index {index} is not a positive 1-based index"
        )));
    }

    u32::try_from(index - 1).map_err(|_| {
        MeshViewError::Input(format!(
            "line {line_no}: face index {index} is out of range"
        ))
    })
}

/// Enforce the mesh invariant: every index refers to a parsed vertex.
fn validate_indices(mesh: &Mesh, path: &Path) -> Result<()> {
    let count = mesh.vertex_count() as u32;
    for &i in &mesh.indices {
        if i >= count {
            return Err(MeshViewError::Input(format!(
                "{}: face references vertex {} but only {count} vertices exist",
                path.display(),
                i + 1
            )));
        }
    }
    Ok(())
}
