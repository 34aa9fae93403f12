//! Flat Lambertian shading with a single directional light.

use crate::colors::Color;
use crate::math::vec3::Vec3;
use crate::triangle::Triple;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// All rays are parallel, so one intensity per face is enough for flat shading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// The normalized direction the light travels in.
    pub direction: Vec3,
    /// Per-channel light color, nominally in [0, 1].
    pub color: Vec3,
}

impl DirectionalLight {
    /// Create a new directional light pointing in the given direction.
    /// The direction will be normalized automatically.
    pub fn new(direction: Vec3, color: Vec3) -> Self {
        DirectionalLight {
            direction: direction.normalize(),
            color,
        }
    }

    /// Lambertian intensity for a unit face normal: the cosine between the
    /// normal and the light direction. Not clamped; the caller culls.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        normal.dot(self.direction)
    }

    /// Flat color of a face lit with `intensity`.
    ///
    /// Each channel is `intensity * 255 * light channel`, clamped to [0, 255]
    /// and truncated. Alpha is opaque.
    pub fn face_color(&self, intensity: f32) -> Color {
        let channel = |c: f32| (intensity * 255.0 * c).clamp(0.0, 255.0) as u8;
        Color::rgb(
            channel(self.color.x),
            channel(self.color.y),
            channel(self.color.z),
        )
    }

    /// Shade one face given its world-space vertices.
    ///
    /// Returns None when the face is culled, i.e. its intensity is not above
    /// `cull_threshold`. A zero-area face has no normal and is always culled.
    pub fn shade_face(&self, world: &Triple<Vec3>, cull_threshold: f32) -> Option<Color> {
        let intensity = self.intensity(face_normal(world));
        if intensity > cull_threshold {
            Some(self.face_color(intensity))
        } else {
            None
        }
    }
}

impl Default for DirectionalLight {
    /// White light travelling into the screen.
    fn default() -> Self {
        Self::new(Vec3::BACK, Vec3::ONE)
    }
}

/// Unit normal of a face, `(C - A) × (B - A)` normalized.
///
/// With this operand order, a face wound counter-clockwise as seen by the
/// viewer gets a normal pointing away from the viewer, along the default
/// light direction.
pub fn face_normal(world: &Triple<Vec3>) -> Vec3 {
    let (a, b, c) = (world.a(), world.b(), world.c());
    (c - a).cross(b - a).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn facing_viewer() -> Triple<Vec3> {
        // Counter-clockwise in the xy plane, outward normal +z
        Triple::new(
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
            Vec3::new(0.0, 0.5, 0.0),
        )
    }

    #[test]
    fn normal_points_into_screen_for_ccw_face() {
        let n = face_normal(&facing_viewer());
        assert_relative_eq!(n.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn direct_illumination_gives_full_intensity() {
        let light = DirectionalLight::default();
        assert_relative_eq!(light.intensity(face_normal(&facing_viewer())), 1.0, epsilon = 1e-6);
        assert_eq!(light.shade_face(&facing_viewer(), 0.0), Some(Color::rgb(255, 255, 255)));
    }

    #[test]
    fn reversed_winding_is_culled() {
        let t = facing_viewer();
        let reversed = Triple::new(t.a(), t.c(), t.b());
        let light = DirectionalLight::default();
        assert_eq!(light.shade_face(&reversed, 0.0), None);
        assert_eq!(light.shade_face(&reversed, 1e-4), None);
    }

    #[test]
    fn perpendicular_face_is_culled() {
        // Lies in the xz plane, so its normal is perpendicular to the light
        let edge_on = Triple::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert_eq!(DirectionalLight::default().shade_face(&edge_on, 0.0), None);
    }

    #[test]
    fn degenerate_face_is_culled() {
        let p = Vec3::new(0.3, 0.3, 0.3);
        let collapsed = Triple::new(p, p, Vec3::new(0.6, 0.6, 0.6));
        assert_eq!(DirectionalLight::default().shade_face(&collapsed, 0.0), None);
    }

    #[test]
    fn threshold_separates_grazing_faces() {
        let light = DirectionalLight::default();
        // Intensity just above zero but below the depth-pass threshold
        let grazing = Triple::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1e-5, 1.0),
        );
        let intensity = light.intensity(face_normal(&grazing));
        assert!(intensity > 0.0 && intensity < 1e-4, "intensity was {intensity}");
        assert!(light.shade_face(&grazing, 0.0).is_some());
        assert_eq!(light.shade_face(&grazing, 1e-4), None);
    }

    #[test]
    fn face_color_scales_light_color() {
        let light = DirectionalLight::new(Vec3::BACK, Vec3::new(0.5, 0.5, 0.3));
        assert_eq!(light.face_color(1.0), Color::rgb(127, 127, 76));
        assert_eq!(light.face_color(0.5), Color::rgb(63, 63, 38));
    }

    #[test]
    fn face_color_clamps_bright_light() {
        let light = DirectionalLight::new(Vec3::BACK, Vec3::new(2.0, 1.0, 0.0));
        assert_eq!(light.face_color(1.0), Color::rgb(255, 255, 0));
    }
}
