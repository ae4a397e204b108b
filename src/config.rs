use std::path::PathBuf;

use clap::Parser;

/// UV projection policy applied after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum UvProjection {
    /// `u` from X, `v` from Y.
    #[default]
    #[value(name = "xy")]
    Xy,
    /// `u` from Z, `v` from Y.
    #[value(name = "zy")]
    Zy,
}

impl std::fmt::Display for UvProjection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UvProjection::Xy => write!(f, "xy"),
            UvProjection::Zy => write!(f, "zy"),
        }
    }
}

/// Texture coordinate wrap mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum WrapMode {
    #[default]
    #[value(name = "repeat")]
    Repeat,
    #[value(name = "clamp")]
    ClampToEdge,
    #[value(name = "mirror")]
    MirroredRepeat,
}

impl std::fmt::Display for WrapMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WrapMode::Repeat => write!(f, "repeat"),
            WrapMode::ClampToEdge => write!(f, "clamp"),
            WrapMode::MirroredRepeat => write!(f, "mirror"),
        }
    }
}

/// Texture sampling filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FilterMode {
    #[value(name = "nearest")]
    Nearest,
    #[default]
    #[value(name = "linear")]
    Linear,
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterMode::Nearest => write!(f, "nearest"),
            FilterMode::Linear => write!(f, "linear"),
        }
    }
}

/// The full set of recognized texture sampling options, passed to the
/// backend in one structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureOptions {
    pub wrap: WrapMode,
    pub min_filter: FilterMode,
    pub mag_filter: FilterMode,
    /// Numeric texture slot the backend binds to.
    pub slot: u32,
    pub generate_mipmaps: bool,
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self {
            wrap: WrapMode::Repeat,
            min_filter: FilterMode::Linear,
            mag_filter: FilterMode::Linear,
            slot: 0,
            generate_mipmaps: true,
        }
    }
}

/// Camera construction parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub world_up: [f32; 3],
    pub near: f32,
    pub far: f32,
    pub aspect: f32,
    pub speed: f32,
    pub sensitivity: f32,
    pub fov_deg: f32,
    pub yaw_deg: f32,
    pub pitch_deg: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 2.0],
            target: [0.0, 0.0, 0.0],
            world_up: [0.0, 1.0, 0.0],
            near: 1.0,
            far: 10.0,
            aspect: 1980.0 / 1080.0,
            speed: 2.5,
            sensitivity: 0.1,
            fov_deg: 45.0,
            yaw_deg: -90.0,
            pitch_deg: 0.0,
        }
    }
}

/// Fully resolved viewer configuration (constructed from CLI args).
#[derive(Debug, Clone, Default)]
pub struct ViewerConfig {
    pub mesh: PathBuf,
    pub texture: PathBuf,
    pub uv_projection: UvProjection,
    pub texture_options: TextureOptions,
    pub camera: CameraConfig,
    pub verbose: bool,
}

/// CLI argument definition (clap derive).
#[derive(Parser, Debug)]
#[command(
    name = "meshview",
    about = "OBJ mesh viewer core: geometry pipeline and camera transforms",
    version
)]
pub struct CliArgs {
    /// Path to the OBJ mesh file
    pub mesh: PathBuf,

    /// Path to the texture image
    pub texture: PathBuf,

    /// UV projection policy
    #[arg(long, value_enum, default_value_t = UvProjection::Xy)]
    pub uv_projection: UvProjection,

    /// Texture wrap mode
    #[arg(long, value_enum, default_value_t = WrapMode::Repeat)]
    pub wrap: WrapMode,

    /// Texture sampling filter (used for both minification and magnification)
    #[arg(long, value_enum, default_value_t = FilterMode::Linear)]
    pub filter: FilterMode,

    /// Texture slot to bind
    #[arg(long, default_value_t = 0)]
    pub slot: u32,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<CliArgs> for ViewerConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            mesh: args.mesh,
            texture: args.texture,
            uv_projection: args.uv_projection,
            texture_options: TextureOptions {
                wrap: args.wrap,
                min_filter: args.filter,
                mag_filter: args.filter,
                slot: args.slot,
                ..TextureOptions::default()
            },
            camera: CameraConfig::default(),
            verbose: args.verbose,
        }
    }
}
