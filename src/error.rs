use std::io;

/// All error types for the meshview core.
#[derive(thiserror::Error, Debug)]
pub enum MeshViewError {
    #[error("Input error: {0}")]
    Input(String),
    #[error("Geometry error: {0}")]
    Geometry(String),
    #[error("Material error: {0}")]
    Material(String),
    #[error("Texture error: {0}")]
    Texture(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MeshViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_strings() {
        let e = MeshViewError::Input("bad file".into());
        assert_eq!(e.to_string(), "Input error: bad file");

        let e = MeshViewError::Geometry("no vertices".into());
        assert_eq!(e.to_string(), "Geometry error: no vertices");

        let e = MeshViewError::Material("bad token".into());
        assert_eq!(e.to_string(), "Material error: bad token");

        let e = MeshViewError::Texture("decode failed".into());
        assert_eq!(e.to_string(), "Texture error: decode failed");
    }

    #[test]
    fn from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file missing");
        let e: MeshViewError = io_err.into();
        assert!(matches!(e, MeshViewError::Io(_)));
        assert!(e.to_string().contains("file missing"));
    }
}
