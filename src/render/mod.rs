//! Rasterization core: buffers, line drawing, barycentric coordinates and the
//! triangle fill strategies.

pub mod barycentric;
pub mod depth;
pub mod framebuffer;
pub mod line;
pub mod rasterizer;

pub use depth::DepthBuffer;
pub use framebuffer::{FrameBuffer, RenderTarget};
pub use line::{draw_line, draw_triangle_wireframe};
pub use rasterizer::{
    BoundingBoxRasterizer, Rasterizer, RasterizerDispatcher, RasterizerType, ScanlineRasterizer,
    Triangle,
};
