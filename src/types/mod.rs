pub mod material;
pub mod mesh;

pub use material::{MaterialParams, TextureData};
pub use mesh::{Bounds, Mesh, Vertex};
