//! A CPU software rasterizer for triangle meshes.
//!
//! Meshes are projected orthographically, shaded with one flat color per face
//! from a single directional light, and resolved with a depth buffer. All
//! rendering happens on the CPU in a single pass.
//!
//! # Quick Start
//!
//! ```no_run
//! use flatraster::prelude::*;
//!
//! let mesh = Mesh::from_obj("obj/african_head.obj")?;
//! let mut frame = Engine::new(&mesh, 800, 800).render().buffer;
//! frame.flip_vertically();
//! frame.write_to_file("output.tga")?;
//! # Ok::<(), flatraster::RenderError>(())
//! ```

pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod light;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;
pub mod triangle;

// Re-export commonly needed types at crate root for convenience
pub use config::{Args, RenderConfig};
pub use engine::{Engine, Frame, RenderMode, RenderStats};
pub use error::{RenderError, Result};
pub use mesh::Mesh;
pub use projection::{RoundingPolicy, ScreenMapper};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::colors::Color;
    pub use crate::config::RenderConfig;
    pub use crate::engine::{Engine, RenderMode};
    pub use crate::light::DirectionalLight;
    pub use crate::math::vec2::Vec2i;
    pub use crate::math::vec3::Vec3;
    pub use crate::mesh::Mesh;
    pub use crate::projection::{RoundingPolicy, ScreenMapper};
    pub use crate::render::{FrameBuffer, Rasterizer, RasterizerType, RenderTarget};
    pub use crate::triangle::{Face, Triple};
}
