pub mod config;
pub mod error;
pub mod geometry;
pub mod ingestion;
pub mod math;
pub mod pipeline;
pub mod render;
pub mod scene;
pub mod types;

pub use config::{CliArgs, ViewerConfig};
pub use error::{MeshViewError, Result};
pub use pipeline::{LoadedScene, Viewer};
pub use scene::{Camera, Scene, SceneObject};
