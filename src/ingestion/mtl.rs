//! MTL material parser.
//!
//! Recognizes the subset the shading model consumes: `newmtl`, `Ns`,
//! `Ni`, `d`, `illum` as single floats and `Ka`/`Kd`/`Ks`/`Ke` as
//! triples.  A missing or unparseable file never fails the load; the
//! caller falls back to [`MaterialParams::default`].

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{MeshViewError, Result};
use crate::types::MaterialParams;

/// Load the material next to a mesh, falling back to defaults.
pub fn load_material(path: &Path) -> MaterialParams {
    match parse_mtl(path) {
        Ok(params) => {
            debug!(material = %params.name, "Loaded material");
            params
        }
        Err(e) => {
            warn!(path = %path.display(), %e, "Material unavailable, using defaults");
            MaterialParams::default()
        }
    }
}

/// Parse an MTL file; any I/O or syntax problem is an error.
pub fn parse_mtl(path: &Path) -> Result<MaterialParams> {
    let text = fs::read_to_string(path).map_err(|e| {
        MeshViewError::Material(format!("Failed to open {}: {e}", path.display()))
    })?;

    let mut params = MaterialParams::default();

    for (line_no, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("newmtl") => {
                params.name = tokens.next().unwrap_or("").to_string();
            }
            Some("Ns") => params.shininess = parse_scalar(tokens.next(), line_no + 1)?,
            Some("Ni") => params.refraction = parse_scalar(tokens.next(), line_no + 1)?,
            Some("d") => params.opacity = parse_scalar(tokens.next(), line_no + 1)?,
            Some("illum") => params.illum = parse_scalar(tokens.next(), line_no + 1)?,
            Some("Ka") => params.ambient = parse_triple(&mut tokens, line_no + 1)?,
            Some("Kd") => params.diffuse = parse_triple(&mut tokens, line_no + 1)?,
            Some("Ks") => params.specular = parse_triple(&mut tokens, line_no + 1)?,
            Some("Ke") => params.emissive = parse_triple(&mut tokens, line_no + 1)?,
            _ => {}
        }
    }

    Ok(params)
}

fn parse_scalar(token: Option<&str>, line_no: usize) -> Result<f32> {
    let token = token.ok_or_else(|| {
        MeshViewError::Material(format!("line {line_no}: missing value"))
    })?;
    token.parse().map_err(|_| {
        MeshViewError::Material(format!("line {line_no}: invalid value {token:?}"))
    })
}

fn parse_triple<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line_no: usize,
) -> Result<[f32; 3]> {
    let mut out = [0.0_f32; 3];
    for slot in &mut out {
        *slot = parse_scalar(tokens.next(), line_no)?;
    }
    Ok(out)
}
