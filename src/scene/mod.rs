//! Scene state: the object entity and the camera, stepped once per
//! frame.
//!
//! Both live here as explicit context objects handed to whoever needs
//! them; there is no process-wide ambient state.  Everything is plain
//! owned data -- the frame loop is single-threaded and cooperative, so
//! no synchronization is involved.

pub mod camera;
pub mod object;

pub use camera::{Camera, CameraDirection};
pub use object::{Axis, SceneObject};

use crate::config::CameraConfig;
use crate::math::{Mat4, Vec3};
use crate::types::{MaterialParams, Mesh};

/// One frame's worth of sampled input.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Pointer motion delta (dx, dy) driving camera orientation.
    pub pointer_delta: Option<(f32, f32)>,
    /// Scroll delta driving camera zoom.
    pub scroll_delta: Option<f32>,
    /// Held camera movement directions.
    pub camera_moves: Vec<CameraDirection>,
    /// Object translation requests: axis and direction sign.
    pub object_moves: Vec<(Axis, f32)>,
    /// Object Y-axis spin for this frame, radians.
    pub spin: f32,
}

/// The matrices and camera position handed to the render backend for
/// one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameMatrices {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub camera_position: Vec3,
}

/// The object and camera, advanced in lockstep each frame.
#[derive(Debug, Clone)]
pub struct Scene {
    pub object: SceneObject,
    pub camera: Camera,
}

impl Scene {
    pub fn new(mesh: Mesh, material: MaterialParams, camera_config: &CameraConfig) -> Self {
        Self {
            object: SceneObject::new(mesh, material),
            camera: Camera::new(camera_config),
        }
    }

    /// Apply one frame of input and return the matrices for rendering.
    ///
    /// Mutation order is strict and must be preserved: object
    /// translation, object rotation, camera orientation, camera
    /// movement, camera zoom, then the matrix queries.
    pub fn advance(&mut self, input: &FrameInput, delta_time: f32) -> FrameMatrices {
        for &(axis, direction) in &input.object_moves {
            self.object.translate(axis, direction, delta_time);
        }
        if input.spin != 0.0 {
            self.object.rotate_y(input.spin);
        }

        if let Some((dx, dy)) = input.pointer_delta {
            self.camera.update_direction(dx, dy);
        }
        for &dir in &input.camera_moves {
            self.camera.update_position(dir, delta_time);
        }
        if let Some(dy) = input.scroll_delta {
            self.camera.update_zoom(dy);
        }

        FrameMatrices {
            model: self.object.model_matrix(),
            view: self.camera.view_matrix(),
            projection: self.camera.projection(),
            camera_position: self.camera.position(),
        }
    }
}
