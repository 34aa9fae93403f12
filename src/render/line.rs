//! Line drawing.

use super::framebuffer::RenderTarget;
use super::rasterizer::Triangle;
use crate::colors::Color;
use crate::math::vec2::Vec2i;

/// Draws a line between two pixels using Bresenham's algorithm.
///
/// The loop always runs along the major axis: steep lines are drawn with x
/// and y swapped, and the endpoints are ordered so x increases. The error
/// term is kept in integers scaled by two, so there is no drift and the same
/// pixels come out whichever end the line is drawn from.
///
/// Pixels are overwritten without depth testing. Pixels outside the target
/// are skipped.
pub fn draw_line(target: &mut RenderTarget, p0: Vec2i, p1: Vec2i, color: Color) {
    let (mut x0, mut y0, mut x1, mut y1) = (p0.x, p0.y, p1.x, p1.y);

    let steep = (x0 - x1).abs() < (y0 - y1).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = y1 - y0;
    let derror = dy.abs() * 2;
    let y_step = if y1 > y0 { 1 } else { -1 };

    let mut error = 0;
    let mut y = y0;
    for x in x0..=x1 {
        if steep {
            target.set_pixel(y, x, color);
        } else {
            target.set_pixel(x, y, color);
        }
        error += derror;
        if error > dx {
            y += y_step;
            error -= dx * 2;
        }
    }
}

/// Outline a triangle: edges A→B, B→C, C→A with truncated coordinates.
pub fn draw_triangle_wireframe(target: &mut RenderTarget, triangle: &Triangle, color: Color) {
    let [a, b, c] = triangle
        .map(|p| Vec2i::new(p.x as i32, p.y as i32))
        .to_array();
    draw_line(target, a, b, color);
    draw_line(target, b, c, color);
    draw_line(target, c, a, color);
}
