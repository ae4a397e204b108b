//! Geometry normalization: centroid and bounding-box-derived scale.
//!
//! The summary decouples arbitrary input model size and position from
//! the fixed camera near/far range: every loaded model is rendered
//! pre-shifted to the origin and pre-scaled into a unit-ish volume,
//! regardless of source units.

use tracing::debug;

use crate::math::Vec3;
use crate::types::{Bounds, Mesh};

/// Centroid and scale computed once after parsing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySummary {
    /// Arithmetic mean of all vertex positions.
    pub centroid: Vec3,
    /// Reciprocal of the largest bounding-box extent, or 1.0 when the
    /// mesh is point-like (all extents zero).
    pub scale_factor: f32,
    pub bounds: Bounds,
}

/// Compute the geometry summary for a mesh.
pub fn summarize(mesh: &Mesh) -> GeometrySummary {
    let bounds = Bounds::of(mesh);
    let max_extent = bounds.max_extent();

    // A point-like mesh is already unit-sized; never divide by zero.
    let scale_factor = if max_extent > 0.0 {
        1.0 / max_extent
    } else {
        1.0
    };

    let centroid = centroid(mesh);
    debug!(
        cx = centroid[0],
        cy = centroid[1],
        cz = centroid[2],
        scale = scale_factor,
        "Computed geometry summary"
    );

    GeometrySummary {
        centroid,
        scale_factor,
        bounds,
    }
}

/// Component-wise mean over all vertex positions.
pub fn centroid(mesh: &Mesh) -> Vec3 {
    let count = mesh.vertices.len();
    if count == 0 {
        return [0.0; 3];
    }

    let mut sum = [0.0_f64; 3];
    for v in &mesh.vertices {
        sum[0] += v.position[0] as f64;
        sum[1] += v.position[1] as f64;
        sum[2] += v.position[2] as f64;
    }

    [
        (sum[0] / count as f64) as f32,
        (sum[1] / count as f64) as f32,
        (sum[2] / count as f64) as f32,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vertex;
    use approx::assert_relative_eq;

    fn mesh_of(positions: &[[f32; 3]]) -> Mesh {
        Mesh {
            vertices: positions.iter().map(|&p| Vertex::at(p)).collect(),
            indices: vec![0; positions.len().max(3) / 3 * 3],
        }
    }

    #[test]
    fn centroid_is_arithmetic_mean() {
        let mesh = mesh_of(&[[10.0, 20.0, 30.0], [20.0, 40.0, 60.0]]);
        let c = centroid(&mesh);
        assert_relative_eq!(c[0], 15.0, epsilon = 1e-6);
        assert_relative_eq!(c[1], 30.0, epsilon = 1e-6);
        assert_relative_eq!(c[2], 45.0, epsilon = 1e-6);
    }

    #[test]
    fn centroid_of_empty_mesh_is_origin() {
        assert_eq!(centroid(&Mesh::default()), [0.0; 3]);
    }

    #[test]
    fn scale_times_max_extent_is_one() {
        let mesh = mesh_of(&[[-1.0, 0.0, 0.0], [3.0, 1.0, 0.5]]);
        let summary = summarize(&mesh);
        assert_relative_eq!(
            summary.scale_factor * summary.bounds.max_extent(),
            1.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn unit_quad_summary() {
        let mesh = mesh_of(&[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ]);
        let summary = summarize(&mesh);
        assert_relative_eq!(summary.centroid[0], 0.5, epsilon = 1e-6);
        assert_relative_eq!(summary.centroid[1], 0.5, epsilon = 1e-6);
        assert_relative_eq!(summary.centroid[2], 0.0, epsilon = 1e-6);
        assert_relative_eq!(summary.scale_factor, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn point_mesh_falls_back_to_unit_scale() {
        // All vertices coincide: extents are zero, scale must stay finite.
        let mesh = mesh_of(&[[2.0, 2.0, 2.0], [2.0, 2.0, 2.0], [2.0, 2.0, 2.0]]);
        let summary = summarize(&mesh);
        assert!(summary.scale_factor.is_finite());
        assert_eq!(summary.scale_factor, 1.0);
        assert_eq!(summary.centroid, [2.0, 2.0, 2.0]);
    }
}
