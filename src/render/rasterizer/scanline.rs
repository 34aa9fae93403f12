//! Scanline-based triangle rasterization.
//!
//! # Algorithm Overview
//!
//! The triangle is walked one horizontal row at a time, bottom to top:
//!
//! 1. **Snap** vertices to whole pixels and **sort** them by y, so that
//!    `t0.y <= t1.y <= t2.y`
//! 2. For every row offset `i` in `[0, t2.y - t0.y)`, find where the row meets
//!    the long edge `t0 → t2` and the short edge of the current half
//!    (`t0 → t1` below the middle vertex, `t1 → t2` above it)
//! 3. Fill the inclusive span between the two crossings
//!
//! ```text
//!            t2
//!            /|
//!   upper   / |
//!   half   /  |
//!      t1 <---| <- split at t1.y
//!   lower  \  |
//!   half    \ |
//!            \|
//!            t0
//! ```
//!
//! Edge crossings are interpolated with `alpha = i / total_height` on the long
//! edge and `beta = i' / segment_height` on the short edge, then truncated to
//! integers. A triangle whose first two vertices share a row is walked as if
//! it only had an upper half, which keeps `segment_height` non-zero.
//!
//! Rows and spans are clamped to the target before they are walked.
//!
//! The row `t2.y` itself is never filled. There is no depth test; this
//! strategy is meant for flat, single-color fills.

use super::{Rasterizer, Triangle};
use crate::colors::Color;
use crate::math::vec2::Vec2i;
use crate::render::barycentric::PIXEL_AREA_EPSILON;
use crate::render::framebuffer::RenderTarget;

/// Scanline triangle rasterizer for flat fills.
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    /// Creates a new scanline rasterizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Sorts three vertices by y coordinate, ascending.
    fn sort_vertices(t0: &mut Vec2i, t1: &mut Vec2i, t2: &mut Vec2i) {
        if t0.y > t1.y {
            std::mem::swap(t0, t1);
        }
        if t0.y > t2.y {
            std::mem::swap(t0, t2);
        }
        if t1.y > t2.y {
            std::mem::swap(t1, t2);
        }
    }

    /// Twice the signed area of the snapped triangle.
    fn doubled_area(t0: Vec2i, t1: Vec2i, t2: Vec2i) -> i64 {
        let ab = t1 - t0;
        let ac = t2 - t0;
        ab.x as i64 * ac.y as i64 - ab.y as i64 * ac.x as i64
    }

    /// Fill the snapped, y-sorted triangle row by row.
    fn fill_sorted(t0: Vec2i, t1: Vec2i, t2: Vec2i, target: &mut RenderTarget, color: Color) {
        let total_height = t2.y - t0.y;
        let lower_height = t1.y - t0.y;
        let max_x = target.width() as i32 - 1;

        // Only rows inside the target are walked
        let first_row = 0i32.saturating_sub(t0.y).max(0);
        let last_row = total_height.min((target.height() as i32).saturating_sub(t0.y));

        for i in first_row..last_row {
            let second_half = i > lower_height || t1.y == t0.y;
            let segment_height = if second_half { t2.y - t1.y } else { lower_height };
            let alpha = i as f32 / total_height as f32;
            let beta = (i - if second_half { lower_height } else { 0 }) as f32
                / segment_height as f32;

            let mut a = t0 + (t2 - t0) * alpha;
            let mut b = if second_half {
                t1 + (t2 - t1) * beta
            } else {
                t0 + (t1 - t0) * beta
            };
            if a.x > b.x {
                std::mem::swap(&mut a, &mut b);
            }

            let y = t0.y + i;
            for x in a.x.max(0)..=b.x.min(max_x) {
                target.set_pixel(x, y, color);
            }
        }
    }
}

impl Default for ScanlineRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for ScanlineRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, target: &mut RenderTarget, color: Color) {
        let [mut t0, mut t1, mut t2] = triangle
            .map(|p| Vec2i::new(p.x as i32, p.y as i32))
            .to_array();

        if (Self::doubled_area(t0, t1, t2).abs() as f32) < PIXEL_AREA_EPSILON {
            return;
        }

        Self::sort_vertices(&mut t0, &mut t1, &mut t2);
        Self::fill_sorted(t0, t1, t2, target, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BACKGROUND, RED};
    use crate::math::vec3::Vec3;
    use crate::render::depth::DepthBuffer;
    use crate::render::framebuffer::FrameBuffer;
    use crate::triangle::Triple;

    fn tri(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> Triangle {
        Triple::new(
            Vec3::new(a.0, a.1, 0.0),
            Vec3::new(b.0, b.1, 0.0),
            Vec3::new(c.0, c.1, 0.0),
        )
    }

    fn count(frame: &FrameBuffer, color: Color) -> usize {
        frame.pixels().iter().filter(|&&c| c == color).count()
    }

    #[test]
    fn sorts_by_y() {
        let (mut a, mut b, mut c) = (Vec2i::new(0, 9), Vec2i::new(1, 3), Vec2i::new(2, 5));
        ScanlineRasterizer::sort_vertices(&mut a, &mut b, &mut c);
        assert_eq!((a.y, b.y, c.y), (3, 5, 9));
    }

    #[test]
    fn fills_right_triangle_rows() {
        let mut frame = FrameBuffer::new(20, 20, BACKGROUND);
        let t = tri((0.0, 0.0), (10.0, 0.0), (0.0, 10.0));
        ScanlineRasterizer::new().fill_triangle(&t, &mut RenderTarget::new(&mut frame), RED);
        // Row y spans x = 0..=10-y, for y in 0..10
        assert_eq!(count(&frame, RED), (0..10).map(|y| 11 - y).sum::<usize>());
        assert_eq!(frame.get(10, 0), Some(RED));
        assert_eq!(frame.get(0, 10), Some(BACKGROUND));
    }

    #[test]
    fn vertex_order_does_not_matter() {
        let verts = [(10.0, 70.0), (50.0, 160.0), (70.0, 80.0)];
        let orders = [[0, 1, 2], [2, 1, 0], [1, 2, 0], [1, 0, 2]];
        let frames: Vec<FrameBuffer> = orders
            .iter()
            .map(|o| {
                let mut frame = FrameBuffer::new(200, 200, BACKGROUND);
                let t = tri(verts[o[0]], verts[o[1]], verts[o[2]]);
                ScanlineRasterizer::new().fill_triangle(&t, &mut RenderTarget::new(&mut frame), RED);
                frame
            })
            .collect();
        assert!(frames.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn zero_height_triangle_draws_nothing() {
        let mut frame = FrameBuffer::new(20, 20, BACKGROUND);
        let t = tri((1.0, 5.0), (8.0, 5.0), (15.0, 5.0));
        ScanlineRasterizer::new().fill_triangle(&t, &mut RenderTarget::new(&mut frame), RED);
        assert_eq!(count(&frame, RED), 0);
    }

    #[test]
    fn clips_rows_and_spans_to_target() {
        // Integer offsets shift every row and span by the same amount
        let [a, b, c] = [(-150.0, -100.0), (60.0, -40.0), (10.0, 80.0)];
        let shift = |(x, y): (f32, f32)| (x + 200.0, y + 200.0);

        let mut clipped = FrameBuffer::new(40, 40, BACKGROUND);
        ScanlineRasterizer::new().fill_triangle(
            &tri(a, b, c),
            &mut RenderTarget::new(&mut clipped),
            RED,
        );
        let mut whole = FrameBuffer::new(400, 400, BACKGROUND);
        ScanlineRasterizer::new().fill_triangle(
            &tri(shift(a), shift(b), shift(c)),
            &mut RenderTarget::new(&mut whole),
            RED,
        );

        let covered = count(&clipped, RED);
        assert!(covered > 0 && covered < 40 * 40);
        for y in 0..40 {
            for x in 0..40 {
                assert_eq!(clipped.get(x, y), whole.get(x + 200, y + 200), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn offscreen_triangle_draws_nothing() {
        let mut frame = FrameBuffer::new(20, 20, BACKGROUND);
        for t in [
            tri((-50.0, 2.0), (-10.0, 5.0), (-30.0, 15.0)),
            tri((25.0, 2.0), (60.0, 5.0), (40.0, 15.0)),
            tri((2.0, 30.0), (15.0, 40.0), (8.0, 60.0)),
            tri((2.0, -30.0), (15.0, -40.0), (8.0, -60.0)),
        ] {
            ScanlineRasterizer::new().fill_triangle(&t, &mut RenderTarget::new(&mut frame), RED);
        }
        assert_eq!(count(&frame, RED), 0);
    }

    #[test]
    fn ignores_depth_buffer() {
        let mut frame = FrameBuffer::new(20, 20, BACKGROUND);
        let mut depth = DepthBuffer::new(20, 20);
        let t = tri((0.0, 0.0), (10.0, 0.0), (0.0, 10.0));
        ScanlineRasterizer::new().fill_triangle(
            &t,
            &mut RenderTarget::with_depth(&mut frame, &mut depth),
            RED,
        );
        assert!(count(&frame, RED) > 0);
        assert_eq!(depth.get(1, 1), Some(f32::NEG_INFINITY));
    }
}
