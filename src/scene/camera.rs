//! Continuous free-look camera.
//!
//! Orientation is driven by yaw/pitch angles in degrees; the
//! orthonormal basis (direction, right, up) is derived state,
//! recomputed after every orientation change rather than stored as
//! ground truth.

use crate::config::CameraConfig;
use crate::math::{mat4, vec3, Mat4, Vec3};

/// Movement directions understood by [`Camera::update_position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraDirection {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    world_up: Vec3,

    direction: Vec3,
    right: Vec3,
    up: Vec3,

    yaw: f32,
    pitch: f32,
    fov: f32,

    speed: f32,
    sensitivity: f32,
    near: f32,
    far: f32,
    aspect: f32,

    projection: Mat4,
}

impl Camera {
    pub fn new(config: &CameraConfig) -> Self {
        let mut camera = Self {
            position: config.position,
            target: config.target,
            world_up: config.world_up,
            direction: [0.0, 0.0, -1.0],
            right: [1.0, 0.0, 0.0],
            up: config.world_up,
            yaw: config.yaw_deg,
            pitch: config.pitch_deg,
            fov: config.fov_deg,
            speed: config.speed,
            sensitivity: config.sensitivity,
            near: config.near,
            far: config.far,
            aspect: config.aspect,
            projection: mat4::perspective(config.fov_deg, config.aspect, config.near, config.far),
        };
        camera.update_vectors();
        camera
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Initial focus point, fixed at construction.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Apply a pointer motion delta to yaw and pitch.
    ///
    /// Pitch is clamped to [-89, 89] degrees to keep the basis away
    /// from the world-up singularity; the basis is recomputed
    /// immediately.
    pub fn update_direction(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self.pitch.clamp(-89.0, 89.0);
        self.update_vectors();
    }

    /// Move the camera along its basis vectors, scaled by elapsed time.
    pub fn update_position(&mut self, dir: CameraDirection, delta_time: f32) {
        let velocity = self.speed * delta_time;
        let step = match dir {
            CameraDirection::Forward => vec3::scale(self.direction, velocity),
            CameraDirection::Backward => vec3::scale(self.direction, -velocity),
            CameraDirection::Right => vec3::scale(self.right, velocity),
            CameraDirection::Left => vec3::scale(self.right, -velocity),
            CameraDirection::Up => vec3::scale(self.world_up, velocity),
            CameraDirection::Down => vec3::scale(self.world_up, -velocity),
        };
        self.position = vec3::add(self.position, step);
    }

    /// Apply a scroll delta to the field of view, clamped to [1, 45]
    /// degrees, and recompute the projection matrix immediately.
    pub fn update_zoom(&mut self, dy: f32) {
        self.fov = (self.fov - dy).clamp(1.0, 45.0);
        self.projection = mat4::perspective(self.fov, self.aspect, self.near, self.far);
    }

    /// Spherical-to-Cartesian rebuild of the orthonormal basis from
    /// the current yaw and pitch.
    fn update_vectors(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();

        let direction = [
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        ];

        self.direction = vec3::normalize(direction);
        self.right = vec3::normalize(vec3::cross(self.direction, self.world_up));
        self.up = vec3::normalize(vec3::cross(self.right, self.direction));
    }

    /// Look-at view matrix, recomputed on every query.
    pub fn view_matrix(&self) -> Mat4 {
        let forward = vec3::normalize(self.direction);
        let right = vec3::normalize(vec3::cross(forward, self.world_up));
        let up = vec3::cross(right, forward);
        mat4::look_at(self.position, forward, right, up)
    }

    /// Current projection matrix (recomputed only on zoom changes).
    pub fn projection(&self) -> Mat4 {
        self.projection
    }
}
