//! Planar UV projection.
//!
//! Texture coordinates are derived from vertex positions rather than
//! taken from the input file: the min/max of the projected axes are
//! found in a first pass, then every vertex is mapped into [0, 1] in a
//! second pass.

use crate::config::UvProjection;
use crate::types::Mesh;

/// Project texture coordinates onto every vertex in-place.
pub fn project(mesh: &mut Mesh, projection: UvProjection) {
    if mesh.vertices.is_empty() {
        return;
    }

    let (u_axis, v_axis) = match projection {
        UvProjection::Xy => (0, 1),
        UvProjection::Zy => (2, 1),
    };

    let first = mesh.vertices[0].position;
    let mut u_min = first[u_axis];
    let mut u_max = first[u_axis];
    let mut v_min = first[v_axis];
    let mut v_max = first[v_axis];

    for v in &mesh.vertices {
        let u = v.position[u_axis];
        let w = v.position[v_axis];
        if u < u_min {
            u_min = u;
        }
        if u > u_max {
            u_max = u;
        }
        if w < v_min {
            v_min = w;
        }
        if w > v_max {
            v_max = w;
        }
    }

    for v in &mut mesh.vertices {
        v.uv = [
            map_unit(v.position[u_axis], u_min, u_max),
            map_unit(v.position[v_axis], v_min, v_max),
        ];
    }
}

/// Map `value` from `[min, max]` into `[0, 1]`; a zero span clamps the
/// coordinate to 0 instead of dividing by zero.
fn map_unit(value: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    if span == 0.0 {
        return 0.0;
    }
    (value - min) / span
}
