pub mod normalize;
pub mod normals;
pub mod uv;

pub use normalize::GeometrySummary;
