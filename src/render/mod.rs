//! Render-backend contract.
//!
//! The core never talks to a graphics API.  This module pins down the
//! data a backend consumes: the interleaved vertex layout, the
//! per-frame uniform block, and the upload/draw trait.  Backends own
//! their GPU handles and are expected to release them in `Drop`, so a
//! handle can never outlive its backend resources on any exit path.

use bytemuck::{Pod, Zeroable};

use crate::config::TextureOptions;
use crate::error::Result;
use crate::math::{Mat4, Vec3};
use crate::scene::FrameMatrices;
use crate::types::{MaterialParams, Mesh, TextureData};

/// Interleaved vertex exactly as the backend consumes it:
/// position(3) + uv(2) + normal(3), tightly packed.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub normal: [f32; 3],
}

/// Flatten a mesh into the interleaved layout, preserving vertex
/// order (the index list refers to it).
pub fn interleave(mesh: &Mesh) -> Vec<GpuVertex> {
    mesh.vertices
        .iter()
        .map(|v| GpuVertex {
            position: v.position,
            uv: v.uv,
            normal: v.normal,
        })
        .collect()
}

/// Uniform inputs for one draw.
#[derive(Debug, Clone, Copy)]
pub struct FrameUniforms {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub camera_position: Vec3,
    /// Color/texture blend factor in [0, 1].
    pub blend_factor: f32,
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub shininess: f32,
}

impl FrameUniforms {
    /// Combine the frame matrices with material scalars.
    pub fn compose(frame: &FrameMatrices, material: &MaterialParams, blend_factor: f32) -> Self {
        Self {
            model: frame.model,
            view: frame.view,
            projection: frame.projection,
            camera_position: frame.camera_position,
            blend_factor,
            ambient: material.ambient,
            diffuse: material.diffuse,
            specular: material.specular,
            shininess: material.shininess,
        }
    }
}

/// The surface a rendering backend implements.
///
/// Handles are associated types so a backend can wrap raw GPU object
/// ids in owned types with `Drop` release semantics.
pub trait RenderBackend {
    type MeshHandle;
    type TextureHandle;

    /// Upload interleaved vertices and a triangle index list.
    fn upload_mesh(&mut self, vertices: &[GpuVertex], indices: &[u32])
        -> Result<Self::MeshHandle>;

    /// Upload a decoded texture with its sampling options; the slot to
    /// bind comes from the options structure.
    fn upload_texture(
        &mut self,
        texture: &TextureData,
        options: &TextureOptions,
    ) -> Result<Self::TextureHandle>;

    /// Draw an indexed triangle list with the given uniforms.
    fn draw(
        &mut self,
        mesh: &Self::MeshHandle,
        texture: &Self::TextureHandle,
        uniforms: &FrameUniforms,
    ) -> Result<()>;
}
