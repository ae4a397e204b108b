//! Smooth (Phong) per-vertex normal computation.
//!
//! Each vertex normal is the normalized, unweighted sum of the face
//! normals of every triangle that references it.  Face normals follow
//! the right-hand rule over the winding order the parser emitted.

use crate::math::vec3;
use crate::types::Mesh;

/// Compute smooth normals for every vertex in-place.
///
/// Vertices untouched by any triangle, or whose accumulated sum has
/// zero length, end up with the zero vector rather than NaN.
pub fn compute(mesh: &mut Mesh) {
    for v in &mut mesh.vertices {
        v.normal = [0.0, 0.0, 0.0];
    }

    for tri in mesh.indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);

        let p0 = mesh.vertices[i0].position;
        let p1 = mesh.vertices[i1].position;
        let p2 = mesh.vertices[i2].position;

        let edge1 = vec3::sub(p1, p0);
        let edge2 = vec3::sub(p2, p0);
        let face_normal = vec3::normalize(vec3::cross(edge1, edge2));

        for &i in &[i0, i1, i2] {
            mesh.vertices[i].normal = vec3::add(mesh.vertices[i].normal, face_normal);
        }
    }

    for v in &mut mesh.vertices {
        v.normal = vec3::normalize(v.normal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vertex;
    use approx::assert_relative_eq;

    #[test]
    fn single_ccw_triangle_faces_positive_z() {
        let mut mesh = Mesh {
            vertices: vec![
                Vertex::at([0.0, 0.0, 0.0]),
                Vertex::at([1.0, 0.0, 0.0]),
                Vertex::at([0.0, 1.0, 0.0]),
            ],
            indices: vec![0, 1, 2],
        };
        compute(&mut mesh);
        for v in &mesh.vertices {
            assert_relative_eq!(v.normal[0], 0.0, epsilon = 1e-6);
            assert_relative_eq!(v.normal[1], 0.0, epsilon = 1e-6);
            assert_relative_eq!(v.normal[2], 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn winding_flip_inverts_the_normal() {
        let mut mesh = Mesh {
            vertices: vec![
                Vertex::at([0.0, 0.0, 0.0]),
                Vertex::at([1.0, 0.0, 0.0]),
                Vertex::at([0.0, 1.0, 0.0]),
            ],
            indices: vec![0, 2, 1],
        };
        compute(&mut mesh);
        assert_relative_eq!(mesh.vertices[0].normal[2], -1.0, epsilon = 1e-6);
    }

    #[test]
    fn shared_vertex_averages_face_normals() {
        // Two faces meeting at a right angle along the Y axis; the
        // shared edge vertices get the normalized sum of both normals.
        let mut mesh = Mesh {
            vertices: vec![
                Vertex::at([0.0, 0.0, 0.0]),
                Vertex::at([0.0, 1.0, 0.0]),
                Vertex::at([1.0, 0.0, 0.0]), // face A in the XY plane (normal +Z)
                Vertex::at([0.0, 0.0, 1.0]), // face B in the YZ plane (normal +X)
            ],
            indices: vec![0, 2, 1, 0, 1, 3],
        };
        compute(&mut mesh);

        // Face A normal: cross((1,0,0),(0,1,0)) = (0,0,1)
        // Face B normal: cross((0,1,0),(0,0,1)) = (1,0,0)
        let shared = mesh.vertices[0].normal;
        let inv_sqrt2 = 1.0 / 2.0_f32.sqrt();
        assert_relative_eq!(shared[0], inv_sqrt2, epsilon = 1e-6);
        assert_relative_eq!(shared[1], 0.0, epsilon = 1e-6);
        assert_relative_eq!(shared[2], inv_sqrt2, epsilon = 1e-6);

        // Unshared vertices keep their single face normal.
        assert_relative_eq!(mesh.vertices[2].normal[2], 1.0, epsilon = 1e-6);
        assert_relative_eq!(mesh.vertices[3].normal[0], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn unreferenced_vertex_gets_zero_normal() {
        let mut mesh = Mesh {
            vertices: vec![
                Vertex::at([0.0, 0.0, 0.0]),
                Vertex::at([1.0, 0.0, 0.0]),
                Vertex::at([0.0, 1.0, 0.0]),
                Vertex::at([9.0, 9.0, 9.0]),
            ],
            indices: vec![0, 1, 2],
        };
        compute(&mut mesh);
        assert_eq!(mesh.vertices[3].normal, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn degenerate_triangle_yields_zero_not_nan() {
        // All three corners collinear: the cross product vanishes.
        let mut mesh = Mesh {
            vertices: vec![
                Vertex::at([0.0, 0.0, 0.0]),
                Vertex::at([1.0, 0.0, 0.0]),
                Vertex::at([2.0, 0.0, 0.0]),
            ],
            indices: vec![0, 1, 2],
        };
        compute(&mut mesh);
        for v in &mesh.vertices {
            assert_eq!(v.normal, [0.0, 0.0, 0.0]);
        }
    }
}
