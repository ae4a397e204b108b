//! The object entity: a mesh plus its live transform state.

use crate::geometry::{normalize, GeometrySummary};
use crate::math::{mat4, Mat4, Vec3};
use crate::types::{MaterialParams, Mesh};

/// Units per second for keyboard-driven object movement.
const MOVE_SPEED: f32 = 2.0;

/// World axis for translation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Flat-matrix translation slot for this axis.
    fn slot(self) -> usize {
        match self {
            Axis::X => 12,
            Axis::Y => 13,
            Axis::Z => 14,
        }
    }
}

/// A loaded mesh together with its geometry summary, material, and the
/// transform state mutated by per-frame input.
///
/// The rotation matrix accumulates and is never reset; the translation
/// matrix holds an absolute offset mutated by movement deltas.
#[derive(Debug, Clone)]
pub struct SceneObject {
    mesh: Mesh,
    summary: GeometrySummary,
    material: MaterialParams,
    translation: Mat4,
    rotation: Mat4,
}

impl SceneObject {
    /// Wrap a fully ingested mesh, computing its geometry summary once.
    pub fn new(mesh: Mesh, material: MaterialParams) -> Self {
        let summary = normalize::summarize(&mesh);
        Self {
            mesh,
            summary,
            material,
            translation: mat4::identity(),
            rotation: mat4::identity(),
        }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn material(&self) -> &MaterialParams {
        &self.material
    }

    pub fn summary(&self) -> &GeometrySummary {
        &self.summary
    }

    /// Current world translation, read from the translation slots.
    pub fn position(&self) -> Vec3 {
        [
            self.translation[12],
            self.translation[13],
            self.translation[14],
        ]
    }

    /// Rotate the object around its own geometric center by `angle`
    /// radians about the Y axis.
    ///
    /// The request composes translate(-centroid) * rotation *
    /// translate(+centroid) and pre-multiplies it onto the accumulated
    /// rotation, so every incremental rotation happens in the centered
    /// frame and is independent of the current world translation.
    pub fn rotate_y(&mut self, angle: f32) {
        let [cx, cy, cz] = self.summary.centroid;

        let centered = mat4::translate(mat4::identity(), -cx, -cy, -cz);
        let rotation = mat4::rotation_y(angle);
        let back = mat4::translate(mat4::identity(), cx, cy, cz);

        let around_center = mat4::multiply(centered, mat4::multiply(rotation, back));
        self.rotation = mat4::multiply(around_center, self.rotation);
    }

    /// Move the object along a world axis; `direction` is the input
    /// sign, `delta_time` the elapsed frame time in seconds.
    pub fn translate(&mut self, axis: Axis, direction: f32, delta_time: f32) {
        self.translation[axis.slot()] += MOVE_SPEED * direction * delta_time;
    }

    /// Compose the model matrix:
    /// `rotation * (uniform_scale(translate(identity, -centroid), scale) * translation)`.
    ///
    /// The mesh is moved so its centroid sits at the origin, scaled
    /// into the unit-ish volume, shifted by the accumulated user
    /// translation, and rotated last so rotation always happens in the
    /// already-centered frame.
    pub fn model_matrix(&self) -> Mat4 {
        let [cx, cy, cz] = self.summary.centroid;

        let m = mat4::translate(mat4::identity(), -cx, -cy, -cz);
        let m = mat4::uniform_scale(m, self.summary.scale_factor);
        let m = mat4::multiply(m, self.translation);
        mat4::multiply(self.rotation, m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::mat4::transform_point;
    use crate::types::Vertex;
    use approx::assert_relative_eq;

    fn unit_quad_object() -> SceneObject {
        let mesh = Mesh {
            vertices: vec![
                Vertex::at([0.0, 0.0, 0.0]),
                Vertex::at([1.0, 0.0, 0.0]),
                Vertex::at([1.0, 1.0, 0.0]),
                Vertex::at([0.0, 1.0, 0.0]),
            ],
            indices: vec![0, 1, 2, 0, 2, 3],
        };
        SceneObject::new(mesh, MaterialParams::default())
    }

    #[test]
    fn new_object_has_identity_transforms() {
        let obj = unit_quad_object();
        assert_eq!(obj.position(), [0.0, 0.0, 0.0]);
        let model = obj.model_matrix();
        // Centroid (0.5, 0.5, 0) maps to the origin under the model
        // matrix: centered, then scaled, no user transform yet.
        let p = transform_point(model, [0.5, 0.5, 0.0]);
        assert_relative_eq!(p[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(p[1], 0.0, epsilon = 1e-6);
        assert_relative_eq!(p[2], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn translation_accumulates_with_move_speed() {
        let mut obj = unit_quad_object();
        obj.translate(Axis::X, 1.0, 0.5);
        obj.translate(Axis::X, 1.0, 0.5);
        obj.translate(Axis::Y, -1.0, 0.25);
        // MOVE_SPEED = 2.0: x = 2*(2*1*0.5), y = 2*(-1*0.25)
        assert_relative_eq!(obj.position()[0], 2.0, epsilon = 1e-6);
        assert_relative_eq!(obj.position()[1], -0.5, epsilon = 1e-6);
        assert_eq!(obj.position()[2], 0.0);
    }

    #[test]
    fn full_turn_restores_rotation_to_identity() {
        let mut obj = unit_quad_object();
        let step = std::f32::consts::TAU / 36.0;
        for _ in 0..36 {
            obj.rotate_y(step);
        }
        let model = obj.model_matrix();
        let reference = unit_quad_object().model_matrix();
        for i in 0..16 {
            assert_relative_eq!(model[i], reference[i], epsilon = 1e-4);
        }
    }

    #[test]
    fn rotation_preserves_centroid_relative_positions() {
        let mut obj = unit_quad_object();
        let before = transform_point(obj.model_matrix(), [0.5, 0.5, 0.0]);

        obj.rotate_y(1.2);
        let after = transform_point(obj.model_matrix(), [0.5, 0.5, 0.0]);

        // The centroid itself is a fixed point of the rotation.
        for axis in 0..3 {
            assert_relative_eq!(before[axis], after[axis], epsilon = 1e-5);
        }
    }

    #[test]
    fn rotation_around_center_is_independent_of_world_translation() {
        let mut moved = unit_quad_object();
        moved.translate(Axis::X, 1.0, 1.0);

        let centroid_world = transform_point(moved.model_matrix(), [0.5, 0.5, 0.0]);
        moved.rotate_y(0.7);
        let centroid_after = transform_point(moved.model_matrix(), [0.5, 0.5, 0.0]);

        for axis in 0..3 {
            assert_relative_eq!(centroid_world[axis], centroid_after[axis], epsilon = 1e-5);
        }
    }

    #[test]
    fn quarter_turn_moves_corner_as_expected() {
        let mut obj = unit_quad_object();
        obj.rotate_y(std::f32::consts::FRAC_PI_2);

        // Corner (1,1,0) sits at (0.5, 0.5, 0) relative to the
        // centroid; the quarter turn sends that offset to (0, 0.5, 0.5).
        let p = transform_point(obj.model_matrix(), [1.0, 1.0, 0.0]);
        assert_relative_eq!(p[0], 0.0, epsilon = 1e-5);
        assert_relative_eq!(p[1], 0.5, epsilon = 1e-5);
        assert_relative_eq!(p[2], 0.5, epsilon = 1e-5);
    }

    #[test]
    fn model_matrix_scales_oversized_mesh_to_unit_volume() {
        let mesh = Mesh {
            vertices: vec![
                Vertex::at([0.0, 0.0, 0.0]),
                Vertex::at([10.0, 0.0, 0.0]),
                Vertex::at([0.0, 10.0, 0.0]),
            ],
            indices: vec![0, 1, 2],
        };
        let obj = SceneObject::new(mesh, MaterialParams::default());
        let p = transform_point(obj.model_matrix(), [10.0, 0.0, 0.0]);
        // Max extent 10 scales by 0.1; all transformed coordinates
        // stay within the unit-ish volume.
        assert!(p.iter().all(|c| c.abs() <= 1.0));
    }
}
