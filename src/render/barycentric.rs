//! Barycentric coordinates of a point relative to a screen-space triangle.
//!
//! # Method
//!
//! With `A, B, C` the triangle and `P` the query point, build
//!
//! ```text
//! s0 = (C.x - A.x, B.x - A.x, A.x - P.x)
//! s1 = (C.y - A.y, B.y - A.y, A.y - P.y)
//! u  = s0 × s1
//! ```
//!
//! `u.z` is twice the signed area of the triangle. When it is not (close to)
//! zero, the weights for `(A, B, C)` are
//!
//! ```text
//! (1 - (u.x + u.y) / u.z,  u.y / u.z,  u.x / u.z)
//! ```
//!
//! The weights sum to one for any `P`; all three are non-negative exactly
//! when `P` lies inside the triangle or on one of its edges.
//!
//! # Degenerate triangles
//!
//! A triangle whose `|u.z|` falls below the area epsilon has no meaningful
//! weights. The solver then returns [`DEGENERATE`], which has a negative
//! component and is therefore rejected by every caller.

use crate::math::vec3::Vec3;
use crate::triangle::Triple;

/// Area epsilon for triangles with integer pixel coordinates.
///
/// `u.z` is then an integer itself, so any magnitude below one is exactly zero.
pub const PIXEL_AREA_EPSILON: f32 = 1.0;

/// Area epsilon for triangles with fractional coordinates.
///
/// Much smaller than [`PIXEL_AREA_EPSILON`] so genuine sub-pixel slivers still
/// rasterize, but large enough that dividing by `u.z` cannot explode.
pub const SUBPIXEL_AREA_EPSILON: f32 = 1e-2;

/// Weights returned for a degenerate triangle.
pub const DEGENERATE: Vec3 = Vec3::new(-1.0, 1.0, 1.0);

/// Compute the weights of `p` with respect to `triangle`.
///
/// Only the x and y components are used; the z components (depths) are
/// ignored here and interpolated by the caller with the returned weights.
#[inline]
pub fn barycentric(triangle: &Triple<Vec3>, p: Vec3, area_epsilon: f32) -> Vec3 {
    let (a, b, c) = (triangle.a(), triangle.b(), triangle.c());
    let s0 = Vec3::new(c.x - a.x, b.x - a.x, a.x - p.x);
    let s1 = Vec3::new(c.y - a.y, b.y - a.y, a.y - p.y);
    let u = s0.cross(s1);

    if u.z.abs() < area_epsilon {
        return DEGENERATE;
    }
    Vec3::new(1.0 - (u.x + u.y) / u.z, u.y / u.z, u.x / u.z)
}

/// Inclusive inside test: edges and vertices belong to the triangle.
#[inline]
pub fn is_inside(weights: Vec3) -> bool {
    weights.x >= 0.0 && weights.y >= 0.0 && weights.z >= 0.0
}

/// Interpolate one value per vertex with the given weights.
#[inline]
pub fn interpolate(values: Triple<f32>, weights: Vec3) -> f32 {
    values.a() * weights.x + values.b() * weights.y + values.c() * weights.z
}
