//! Small vector types used throughout the pipeline.

pub mod vec2;
pub mod vec3;

pub use vec2::Vec2i;
pub use vec3::Vec3;
