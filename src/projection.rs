//! Orthographic mapping from normalized model space to pixel space.
//!
//! Model coordinates are assumed to lie in `[-1, 1]` on x and y. The mapping
//! stretches that square over the whole image and drops z into the depth
//! channel unchanged. There is no perspective division.

use crate::math::vec3::Vec3;
use crate::triangle::Triple;

/// How a mapped coordinate is snapped to a whole pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingPolicy {
    /// Add 0.5 before truncating.
    #[default]
    Round,
    /// Truncate toward zero.
    Truncate,
}

/// Orthographic screen mapping for one render pass.
///
/// A pass uses a single mapper, so every vertex is snapped with the same
/// rounding policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapper {
    width: u32,
    height: u32,
    rounding: RoundingPolicy,
}

impl ScreenMapper {
    pub fn new(width: u32, height: u32, rounding: RoundingPolicy) -> Self {
        Self {
            width,
            height,
            rounding,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rounding(&self) -> RoundingPolicy {
        self.rounding
    }

    #[inline]
    fn snap(&self, coord: f32, dimension: u32) -> f32 {
        let scaled = (coord + 1.0) * dimension as f32 / 2.0;
        let snapped = match self.rounding {
            RoundingPolicy::Round => (scaled + 0.5) as i32,
            RoundingPolicy::Truncate => scaled as i32,
        };
        snapped as f32
    }

    /// Map one model-space vertex to screen space. `z` passes through.
    pub fn to_screen(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.snap(v.x, self.width), self.snap(v.y, self.height), v.z)
    }

    /// Map the three vertices of a face, keeping their order.
    pub fn triangle_to_screen(&self, world: &Triple<Vec3>) -> Triple<Vec3> {
        world.map(|v| self.to_screen(v))
    }
}
