pub mod mtl;
pub mod obj;
pub mod texture;

use std::path::Path;

use tracing::{debug, info};

use crate::config::ViewerConfig;
use crate::error::{MeshViewError, Result};
use crate::geometry::{normals, uv};
use crate::types::{MaterialParams, Mesh, TextureData};

/// Result of the ingestion stage: a mesh with derived shading
/// attributes, its material, and the decoded texture.
#[derive(Debug)]
pub struct IngestionResult {
    pub mesh: Mesh,
    pub material: MaterialParams,
    pub texture: TextureData,
    pub stats: IngestionStats,
}

/// Statistics about the ingested data.
#[derive(Debug)]
pub struct IngestionStats {
    pub vertices: usize,
    pub triangles: usize,
    pub material_name: String,
    pub texture_width: u32,
    pub texture_height: u32,
}

/// Run the full ingestion stage: parse the OBJ, derive UVs and
/// normals, load the sibling material, decode the texture.
pub fn ingest(config: &ViewerConfig) -> Result<IngestionResult> {
    if !config.mesh.exists() {
        return Err(MeshViewError::Input(format!(
            "Mesh file not found: {}",
            config.mesh.display()
        )));
    }

    let mut mesh = obj::parse_obj(&config.mesh)?;

    // Shading attributes are always recomputed, never read from file.
    uv::project(&mut mesh, config.uv_projection);
    normals::compute(&mut mesh);
    info!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        projection = %config.uv_projection,
        "Mesh loaded"
    );

    let material = mtl::load_material(&material_path(&config.mesh));
    let texture = texture::load_texture(&config.texture)?;

    let stats = IngestionStats {
        vertices: mesh.vertex_count(),
        triangles: mesh.triangle_count(),
        material_name: material.name.clone(),
        texture_width: texture.width,
        texture_height: texture.height,
    };
    debug!(?stats, "Ingestion stats");

    Ok(IngestionResult {
        mesh,
        material,
        texture,
        stats,
    })
}

/// Derive the material path from the mesh path: same stem, `.mtl`.
fn material_path(mesh_path: &Path) -> std::path::PathBuf {
    mesh_path.with_extension("mtl")
}
