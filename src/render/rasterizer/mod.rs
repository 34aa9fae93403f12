//! Triangle rasterization algorithms.
//!
//! Two interchangeable fill strategies sit behind the [`Rasterizer`] trait:
//! - [`BoundingBoxRasterizer`]: bounding box iteration with a barycentric
//!   inside test; honours the depth buffer of the target
//! - [`ScanlineRasterizer`]: edge walking one row at a time; flat fills only,
//!   never consults depth
//!
//! Both agree on the interior of a triangle and may differ by a pixel along
//! its edges, since the scanline walk truncates interpolated edge positions.

mod bounding_box;
mod scanline;

pub use bounding_box::BoundingBoxRasterizer;
pub use scanline::ScanlineRasterizer;

use super::framebuffer::RenderTarget;
use crate::colors::Color;
use crate::math::vec3::Vec3;
use crate::triangle::Triple;

/// Light-cull threshold for flat fills without a depth buffer.
pub const FLAT_LIGHT_CULL_EPSILON: f32 = 0.0;

/// Light-cull threshold when depth testing.
///
/// Slightly above zero so faces seen almost exactly edge-on, whose normals
/// come from near-degenerate geometry, never reach the depth buffer.
pub const DEPTH_LIGHT_CULL_EPSILON: f32 = 1e-4;

/// A triangle in screen space. `z` holds the depth of each vertex.
pub type Triangle = Triple<Vec3>;

/// Trait for triangle rasterization algorithms.
///
/// Implementors define which pixels a triangle covers and write the color to
/// them.
pub trait Rasterizer {
    /// Fill a triangle into the render target with a single color.
    fn fill_triangle(&self, triangle: &Triangle, target: &mut RenderTarget, color: Color);
}

/// Available rasterization algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterizerType {
    /// Bounding box + barycentric test, with depth buffering.
    #[default]
    BoundingBox,
    /// Scanline edge walk, no depth buffer.
    Scanline,
}

impl RasterizerType {
    /// Whether render passes using this strategy allocate a depth buffer.
    pub fn uses_depth(self) -> bool {
        matches!(self, RasterizerType::BoundingBox)
    }

    /// Faces with a light intensity at or below this value are culled.
    pub fn light_cull_threshold(self) -> f32 {
        match self {
            RasterizerType::BoundingBox => DEPTH_LIGHT_CULL_EPSILON,
            RasterizerType::Scanline => FLAT_LIGHT_CULL_EPSILON,
        }
    }
}

impl std::fmt::Display for RasterizerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterizerType::BoundingBox => write!(f, "BoundingBox"),
            RasterizerType::Scanline => write!(f, "Scanline"),
        }
    }
}

/// Holds both rasterizer implementations and forwards to the active one.
pub struct RasterizerDispatcher {
    bounding_box: BoundingBoxRasterizer,
    scanline: ScanlineRasterizer,
    active: RasterizerType,
}

impl RasterizerDispatcher {
    pub fn new(rasterizer_type: RasterizerType) -> Self {
        Self {
            bounding_box: BoundingBoxRasterizer::new(),
            scanline: ScanlineRasterizer::new(),
            active: rasterizer_type,
        }
    }

    pub fn set_type(&mut self, rasterizer_type: RasterizerType) {
        self.active = rasterizer_type;
    }

    pub fn active_type(&self) -> RasterizerType {
        self.active
    }
}

impl Rasterizer for RasterizerDispatcher {
    #[inline]
    fn fill_triangle(&self, triangle: &Triangle, target: &mut RenderTarget, color: Color) {
        match self.active {
            RasterizerType::BoundingBox => {
                self.bounding_box.fill_triangle(triangle, target, color)
            }
            RasterizerType::Scanline => self.scanline.fill_triangle(triangle, target, color),
        }
    }
}
