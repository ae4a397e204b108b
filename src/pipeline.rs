use tracing::info;

use crate::config::{TextureOptions, ViewerConfig};
use crate::error::Result;
use crate::ingestion::{self, IngestionStats};
use crate::scene::Scene;
use crate::types::TextureData;

/// Everything the load stage produces: a steppable scene plus the
/// texture payload and options for the backend.
#[derive(Debug)]
pub struct LoadedScene {
    pub scene: Scene,
    pub texture: TextureData,
    pub texture_options: TextureOptions,
    pub stats: IngestionStats,
}

/// Load-stage orchestrator -- runs ingestion and assembles the scene.
pub struct Viewer;

impl Viewer {
    /// Load the mesh, material and texture named by the configuration
    /// and build the scene around them.
    ///
    /// Any failure here is fatal to startup; the caller reports it and
    /// exits.  The frame loop that subsequently drives
    /// [`Scene::advance`] belongs to the platform layer, not to this
    /// crate.
    pub fn load(config: &ViewerConfig) -> Result<LoadedScene> {
        info!(mesh = %config.mesh.display(), texture = %config.texture.display(), "Loading scene");

        let ingestion = ingestion::ingest(config)?;
        let scene = Scene::new(ingestion.mesh, ingestion.material, &config.camera);

        info!(
            vertices = ingestion.stats.vertices,
            triangles = ingestion.stats.triangles,
            "Scene ready"
        );

        Ok(LoadedScene {
            scene,
            texture: ingestion.texture,
            texture_options: config.texture_options.clone(),
            stats: ingestion.stats,
        })
    }
}

/// Print a load summary to stdout.
pub fn print_summary(loaded: &LoadedScene) {
    let stats = &loaded.stats;
    let summary = loaded.scene.object.summary();

    println!("=== Mesh ===");
    println!("  Vertices:  {}", stats.vertices);
    println!("  Triangles: {}", stats.triangles);
    println!(
        "  Centroid:  ({:.3}, {:.3}, {:.3})",
        summary.centroid[0], summary.centroid[1], summary.centroid[2]
    );
    println!("  Scale:     {:.6}", summary.scale_factor);
    println!("=== Material ===");
    println!("  Name:      {}", stats.material_name);
    println!("=== Texture ===");
    println!(
        "  Size:      {}x{} (slot {})",
        stats.texture_width, stats.texture_height, loaded.texture_options.slot
    );
}
