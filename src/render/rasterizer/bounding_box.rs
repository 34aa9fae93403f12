//! Bounding box + barycentric triangle rasterization.
//!
//! # Algorithm Overview
//!
//! 1. Compute the integer bounding box of the three vertices, clamped to the
//!    render target
//! 2. For each pixel in the box, compute barycentric weights of the pixel
//!    position (see [`crate::render::barycentric`])
//! 3. Skip the pixel if any weight is negative; this also rejects every pixel
//!    of a degenerate triangle
//! 4. With a depth buffer, interpolate the vertex depths with the weights and
//!    keep the pixel only if it is strictly closer than what is stored
//!
//! Pixels are sampled at their integer coordinates, not at pixel centres, so a
//! vertex with integer coordinates always covers its own pixel.

use super::{Rasterizer, Triangle};
use crate::colors::Color;
use crate::math::vec3::Vec3;
use crate::render::barycentric::{barycentric, interpolate, is_inside, SUBPIXEL_AREA_EPSILON};
use crate::render::framebuffer::RenderTarget;

/// Triangle rasterizer testing every pixel of the triangle's bounding box.
///
/// This is the depth-capable strategy: when the target carries a depth
/// buffer, each covered pixel goes through the depth test before its color
/// is written.
pub struct BoundingBoxRasterizer {
    area_epsilon: f32,
}

impl BoundingBoxRasterizer {
    /// Creates a rasterizer for fractional screen coordinates.
    pub fn new() -> Self {
        Self::with_area_epsilon(SUBPIXEL_AREA_EPSILON)
    }

    /// Creates a rasterizer with a custom degenerate-area threshold, e.g.
    /// [`crate::render::barycentric::PIXEL_AREA_EPSILON`] for triangles
    /// snapped to whole pixels.
    pub fn with_area_epsilon(area_epsilon: f32) -> Self {
        Self { area_epsilon }
    }

    pub fn area_epsilon(&self) -> f32 {
        self.area_epsilon
    }
}

impl Default for BoundingBoxRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for BoundingBoxRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, target: &mut RenderTarget, color: Color) {
        let [v0, v1, v2] = triangle.to_array();

        let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i32).max(0);
        let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i32).min(target.width() as i32 - 1);
        let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i32).max(0);
        let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i32).min(target.height() as i32 - 1);

        let depths = triangle.map(|v| v.z);
        let depth_test = target.has_depth();

        for x in min_x..=max_x {
            for y in min_y..=max_y {
                let weights = barycentric(
                    triangle,
                    Vec3::new(x as f32, y as f32, 0.0),
                    self.area_epsilon,
                );
                if !is_inside(weights) {
                    continue;
                }
                if depth_test {
                    target.set_pixel_with_depth(x, y, interpolate(depths, weights), color);
                } else {
                    target.set_pixel(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BACKGROUND, GREEN, RED};
    use crate::render::barycentric::PIXEL_AREA_EPSILON;
    use crate::render::depth::DepthBuffer;
    use crate::render::framebuffer::FrameBuffer;
    use crate::triangle::Triple;

    fn tri_at_depth(a: (f32, f32), b: (f32, f32), c: (f32, f32), z: f32) -> Triangle {
        Triple::new(Vec3::new(a.0, a.1, z), Vec3::new(b.0, b.1, z), Vec3::new(c.0, c.1, z))
    }

    #[test]
    fn fills_vertices_and_leaves_outside_untouched() {
        let mut frame = FrameBuffer::new(200, 200, BACKGROUND);
        let t = tri_at_depth((10.0, 10.0), (100.0, 30.0), (190.0, 160.0), 0.0);
        BoundingBoxRasterizer::with_area_epsilon(PIXEL_AREA_EPSILON).fill_triangle(
            &t,
            &mut RenderTarget::new(&mut frame),
            RED,
        );
        assert_eq!(frame.get(10, 10), Some(RED));
        assert_eq!(frame.get(100, 30), Some(RED));
        assert_eq!(frame.get(190, 160), Some(RED));
        assert_eq!(frame.get(0, 0), Some(BACKGROUND));
        assert_eq!(frame.get(10, 150), Some(BACKGROUND));
    }

    #[test]
    fn clamps_to_target() {
        let mut frame = FrameBuffer::new(20, 20, BACKGROUND);
        let t = tri_at_depth((-50.0, -50.0), (200.0, -50.0), (-50.0, 200.0), 0.0);
        BoundingBoxRasterizer::new().fill_triangle(&t, &mut RenderTarget::new(&mut frame), RED);
        assert!(frame.pixels().iter().all(|&c| c == RED));
    }

    #[test]
    fn offscreen_triangle_draws_nothing() {
        let mut frame = FrameBuffer::new(20, 20, BACKGROUND);
        let t = tri_at_depth((-30.0, 0.0), (-10.0, 0.0), (-20.0, 10.0), 0.0);
        BoundingBoxRasterizer::new().fill_triangle(&t, &mut RenderTarget::new(&mut frame), RED);
        assert!(frame.pixels().iter().all(|&c| c == BACKGROUND));
    }

    #[test]
    fn closer_face_wins_regardless_of_order() {
        let near = tri_at_depth((0.0, 0.0), (30.0, 0.0), (0.0, 30.0), 0.5);
        let far = tri_at_depth((0.0, 0.0), (30.0, 0.0), (0.0, 30.0), -0.5);
        let rasterizer = BoundingBoxRasterizer::new();

        // First face drawn red, second green
        for (first, second, expected) in [(&far, &near, GREEN), (&near, &far, RED)] {
            let mut frame = FrameBuffer::new(40, 40, BACKGROUND);
            let mut depth = DepthBuffer::new(40, 40);
            let mut target = RenderTarget::with_depth(&mut frame, &mut depth);
            rasterizer.fill_triangle(first, &mut target, RED);
            rasterizer.fill_triangle(second, &mut target, GREEN);
            assert_eq!(frame.get(5, 5), Some(expected));
        }
    }

    #[test]
    fn equal_depth_keeps_first_face() {
        let a = tri_at_depth((0.0, 0.0), (30.0, 0.0), (0.0, 30.0), 0.25);
        let b = tri_at_depth((0.0, 0.0), (30.0, 30.0), (0.0, 30.0), 0.25);
        let mut frame = FrameBuffer::new(40, 40, BACKGROUND);
        let mut depth = DepthBuffer::new(40, 40);
        let mut target = RenderTarget::with_depth(&mut frame, &mut depth);
        let rasterizer = BoundingBoxRasterizer::new();
        rasterizer.fill_triangle(&a, &mut target, RED);
        rasterizer.fill_triangle(&b, &mut target, GREEN);
        // Shared region keeps the first color, b-only region gets the second
        assert_eq!(frame.get(2, 10), Some(RED));
        assert_eq!(frame.get(20, 25), Some(GREEN));
    }

    #[test]
    fn interpolates_depth_across_the_face() {
        // Depth rises from 0 at x=0 to 1 at x=30
        let sloped = Triple::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(30.0, 0.0, 1.0),
            Vec3::new(0.0, 30.0, 0.0),
        );
        let mut frame = FrameBuffer::new(40, 40, BACKGROUND);
        let mut depth = DepthBuffer::new(40, 40);
        BoundingBoxRasterizer::new().fill_triangle(
            &sloped,
            &mut RenderTarget::with_depth(&mut frame, &mut depth),
            RED,
        );
        let z = depth.get(15, 0).unwrap();
        assert!((z - 0.5).abs() < 1e-5, "depth was {z}");
        assert_eq!(depth.get(35, 35), Some(f32::NEG_INFINITY));
    }
}
