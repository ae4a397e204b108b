/// Phong lighting parameters parsed from an MTL file.
///
/// Field names follow the MTL record tokens.  The defaults are the
/// fallback set used when no material file is found: neutral gray
/// diffuse, no ambient or specular term.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialParams {
    pub name: String,
    /// Ambient reflectivity (`Ka`).
    pub ambient: [f32; 3],
    /// Diffuse reflectivity (`Kd`).
    pub diffuse: [f32; 3],
    /// Specular reflectivity (`Ks`).
    pub specular: [f32; 3],
    /// Emissive color (`Ke`).
    pub emissive: [f32; 3],
    /// Specular exponent (`Ns`).
    pub shininess: f32,
    /// Optical density / index of refraction (`Ni`).
    pub refraction: f32,
    /// Opacity (`d`).
    pub opacity: f32,
    /// Illumination model (`illum`).
    pub illum: f32,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            name: "default".into(),
            ambient: [0.0, 0.0, 0.0],
            diffuse: [0.8, 0.8, 0.8],
            specular: [0.0, 0.0, 0.0],
            emissive: [0.0, 0.0, 0.0],
            shininess: 10.0,
            refraction: 1.0,
            opacity: 1.0,
            illum: 2.0,
        }
    }
}

/// Raw texture image data decoded to RGBA8.
#[derive(Debug, Clone)]
pub struct TextureData {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl TextureData {
    /// Byte length consistency check: width * height * 4.
    pub fn is_well_formed(&self) -> bool {
        self.data.len() == (self.width as usize) * (self.height as usize) * 4
    }
}
