//! Render settings and their command line front end.
//!
//! [`Args`] is what the user types; [`RenderConfig`] is the validated form the
//! rest of the crate consumes.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::colors::{self, Color};
use crate::engine::RenderMode;
use crate::error::{RenderError, Result};
use crate::light::DirectionalLight;
use crate::math::vec3::Vec3;
use crate::projection::RoundingPolicy;
use crate::render::RasterizerType;

pub const DEFAULT_MESH_PATH: &str = "obj/african_head.obj";
pub const DEFAULT_OUTPUT_PATH: &str = "output.tga";
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;

/// Validated settings for one render job.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub mesh_path: PathBuf,
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub rasterizer: RasterizerType,
    pub rounding: RoundingPolicy,
    pub light: DirectionalLight,
    pub mode: RenderMode,
    pub background: Color,
    pub wireframe_color: Color,
    /// Render the built-in 2D test scene instead of a mesh.
    pub demo: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mesh_path: PathBuf::from(DEFAULT_MESH_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            rasterizer: RasterizerType::default(),
            rounding: RoundingPolicy::default(),
            light: DirectionalLight::default(),
            mode: RenderMode::default(),
            background: colors::BACKGROUND,
            wireframe_color: colors::WIREFRAME,
            demo: false,
        }
    }
}

impl RenderConfig {
    /// Check the settings a render pass cannot recover from.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        // Pixel coordinates and indices must fit in i32
        match self.width.checked_mul(self.height) {
            Some(pixels) if pixels <= i32::MAX as u32 => {}
            _ => {
                return Err(RenderError::InvalidConfig(format!(
                    "image size {}x{} exceeds {} pixels",
                    self.width,
                    self.height,
                    i32::MAX
                )));
            }
        }
        if !self.light.direction.is_finite() {
            return Err(RenderError::InvalidConfig(
                "light direction must be a non-zero vector".to_string(),
            ));
        }
        Ok(())
    }
}

/// Fill strategy, as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RasterizerArg {
    /// Bounding box + barycentric test with a depth buffer
    BoundingBox,
    /// Scanline edge walk without depth
    Scanline,
}

impl From<RasterizerArg> for RasterizerType {
    fn from(arg: RasterizerArg) -> Self {
        match arg {
            RasterizerArg::BoundingBox => RasterizerType::BoundingBox,
            RasterizerArg::Scanline => RasterizerType::Scanline,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoundingArg {
    Round,
    Truncate,
}

impl From<RoundingArg> for RoundingPolicy {
    fn from(arg: RoundingArg) -> Self {
        match arg {
            RoundingArg::Round => RoundingPolicy::Round,
            RoundingArg::Truncate => RoundingPolicy::Truncate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Filled,
    Wireframe,
    FilledWireframe,
}

impl From<ModeArg> for RenderMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Filled => RenderMode::Filled,
            ModeArg::Wireframe => RenderMode::Wireframe,
            ModeArg::FilledWireframe => RenderMode::FilledWireframe,
        }
    }
}

/// Render an OBJ mesh to an image with flat shading.
#[derive(Debug, Parser)]
#[command(name = "flatraster", version, about)]
pub struct Args {
    /// Mesh file to render
    #[arg(default_value = DEFAULT_MESH_PATH)]
    pub mesh: PathBuf,

    /// Output image; the format follows the extension
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Triangle fill strategy
    #[arg(long, value_enum, default_value = "bounding-box")]
    pub rasterizer: RasterizerArg,

    /// How vertices are snapped to pixels
    #[arg(long, value_enum, default_value = "round")]
    pub rounding: RoundingArg,

    /// Direction the light travels in, as X,Y,Z
    #[arg(long, value_parser = parse_vec3, default_value = "0,0,-1")]
    pub light_dir: Vec3,

    /// Light color, as R,G,B in [0, 1]
    #[arg(long, value_parser = parse_vec3, default_value = "1,1,1")]
    pub light_color: Vec3,

    /// What to draw for each visible face
    #[arg(long, value_enum, default_value = "filled")]
    pub mode: ModeArg,

    /// Render the built-in flat 2D test scene instead of the mesh
    #[arg(long)]
    pub demo: bool,
}

impl Args {
    /// Convert to a validated [`RenderConfig`].
    pub fn into_config(self) -> Result<RenderConfig> {
        let config = RenderConfig {
            mesh_path: self.mesh,
            output_path: self.output,
            width: self.width,
            height: self.height,
            rasterizer: self.rasterizer.into(),
            rounding: self.rounding.into(),
            light: DirectionalLight::new(self.light_dir, self.light_color),
            mode: self.mode.into(),
            demo: self.demo,
            ..RenderConfig::default()
        };
        config.validate()?;
        Ok(config)
    }
}

/// Parse `X,Y,Z` into a vector.
fn parse_vec3(s: &str) -> std::result::Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts[..] else {
        return Err(format!("expected three comma-separated numbers, got '{s}'"));
    };
    let parse = |p: &str| p.parse::<f32>().map_err(|e| format!("'{p}': {e}"));
    Ok(Vec3::new(parse(x)?, parse(y)?, parse(z)?))
}
