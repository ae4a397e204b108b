//! Texture decoding for the render-backend contract.

use std::path::Path;

use tracing::debug;

use crate::error::{MeshViewError, Result};
use crate::types::TextureData;

/// Decode a texture image to RGBA8.
///
/// Unlike materials, a texture the user asked for on the command line
/// is load-critical: failure here aborts startup.
pub fn load_texture(path: &Path) -> Result<TextureData> {
    let img = image::open(path).map_err(|e| {
        MeshViewError::Texture(format!("Failed to decode {}: {e}", path.display()))
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    debug!(width, height, path = %path.display(), "Decoded texture");

    Ok(TextureData {
        data: rgba.into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_png_to_rgba8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checker.png");

        let img = image::RgbaImage::from_fn(8, 8, |x, y| {
            if (x / 2 + y / 2) % 2 == 0 {
                image::Rgba([200, 60, 60, 255])
            } else {
                image::Rgba([60, 60, 200, 255])
            }
        });
        img.save(&path).unwrap();

        let tex = load_texture(&path).unwrap();
        assert_eq!(tex.width, 8);
        assert_eq!(tex.height, 8);
        assert!(tex.is_well_formed());
    }

    #[test]
    fn missing_texture_is_a_texture_error() {
        let err = load_texture(Path::new("/nonexistent/tex.png")).unwrap_err();
        assert!(matches!(err, MeshViewError::Texture(_)));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"definitely not an image").unwrap();
        assert!(load_texture(&path).is_err());
    }
}
