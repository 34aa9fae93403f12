//! Core rendering engine.
//!
//! The [`Engine`] is the render context of one job: it borrows the mesh and
//! carries the light, the screen mapping, the fill strategy and the output
//! colors. [`Engine::render`] runs one complete pass and hands back a fresh
//! frame; nothing is shared between passes.

use crate::colors::{self, Color};
use crate::config::RenderConfig;
use crate::light::DirectionalLight;
use crate::math::vec3::Vec3;
use crate::mesh::Mesh;
use crate::projection::{RoundingPolicy, ScreenMapper};
use crate::render::{
    draw_triangle_wireframe, DepthBuffer, FrameBuffer, Rasterizer, RasterizerDispatcher,
    RasterizerType, RenderTarget, Triangle,
};
use crate::triangle::Triple;

/// What gets drawn for each visible face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Flat-shaded faces only.
    #[default]
    Filled,
    /// Face outlines only.
    Wireframe,
    /// Flat-shaded faces with outlines on top.
    FilledWireframe,
}

impl RenderMode {
    fn draws_fill(self) -> bool {
        matches!(self, RenderMode::Filled | RenderMode::FilledWireframe)
    }

    fn draws_wireframe(self) -> bool {
        matches!(self, RenderMode::Wireframe | RenderMode::FilledWireframe)
    }
}

/// Per-pass face counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Faces lit above the cull threshold and sent to the rasterizer.
    pub faces_drawn: usize,
    /// Faces facing away from (or edge-on to) the light.
    pub faces_culled: usize,
}

/// The result of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Pixels in screen space: row 0 is the bottom of the image.
    pub buffer: FrameBuffer,
    pub stats: RenderStats,
}

pub struct Engine<'a> {
    mesh: &'a Mesh,
    light: DirectionalLight,
    mapper: ScreenMapper,
    rasterizer: RasterizerDispatcher,
    render_mode: RenderMode,
    background: Color,
    wireframe_color: Color,
}

impl<'a> Engine<'a> {
    /// An engine with default light, rounding, strategy and colors.
    pub fn new(mesh: &'a Mesh, width: u32, height: u32) -> Self {
        Self {
            mesh,
            light: DirectionalLight::default(),
            mapper: ScreenMapper::new(width, height, RoundingPolicy::default()),
            rasterizer: RasterizerDispatcher::new(RasterizerType::default()),
            render_mode: RenderMode::default(),
            background: colors::BACKGROUND,
            wireframe_color: colors::WIREFRAME,
        }
    }

    pub fn from_config(mesh: &'a Mesh, config: &RenderConfig) -> Self {
        Self {
            mesh,
            light: config.light,
            mapper: ScreenMapper::new(config.width, config.height, config.rounding),
            rasterizer: RasterizerDispatcher::new(config.rasterizer),
            render_mode: config.mode,
            background: config.background,
            wireframe_color: config.wireframe_color,
        }
    }

    pub fn set_light(&mut self, light: DirectionalLight) {
        self.light = light;
    }

    pub fn light(&self) -> DirectionalLight {
        self.light
    }

    pub fn set_rounding(&mut self, rounding: RoundingPolicy) {
        self.mapper = ScreenMapper::new(self.mapper.width(), self.mapper.height(), rounding);
    }

    pub fn set_rasterizer(&mut self, rasterizer_type: RasterizerType) {
        self.rasterizer.set_type(rasterizer_type);
    }

    pub fn rasterizer(&self) -> RasterizerType {
        self.rasterizer.active_type()
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn set_wireframe_color(&mut self, color: Color) {
        self.wireframe_color = color;
    }

    pub fn mesh(&self) -> &Mesh {
        self.mesh
    }

    /// Run one render pass over every face of the mesh, in mesh order.
    ///
    /// Each face is shaded once from its world-space normal. Faces at or
    /// below the active strategy's cull threshold are skipped; the rest are
    /// mapped to screen space and filled with their flat color, depth-tested
    /// when the strategy uses a depth buffer. Outlines, if enabled, are drawn
    /// after all fills.
    pub fn render(&self) -> Frame {
        let width = self.mapper.width();
        let height = self.mapper.height();
        let active = self.rasterizer.active_type();
        let cull_threshold = active.light_cull_threshold();

        let mut buffer = FrameBuffer::new(width, height, self.background);
        let mut depth = active.uses_depth().then(|| DepthBuffer::new(width, height));
        let mut target = match depth.as_mut() {
            Some(depth) => RenderTarget::with_depth(&mut buffer, depth),
            None => RenderTarget::new(&mut buffer),
        };

        let mut stats = RenderStats::default();
        let mut outlines: Vec<Triangle> = Vec::new();

        for i in 0..self.mesh.face_count() {
            let world = self.mesh.face_vertices(i);
            let Some(color) = self.light.shade_face(&world, cull_threshold) else {
                stats.faces_culled += 1;
                continue;
            };
            let screen = self.mapper.triangle_to_screen(&world);

            if self.render_mode.draws_fill() {
                self.rasterizer.fill_triangle(&screen, &mut target, color);
            }
            if self.render_mode.draws_wireframe() {
                outlines.push(screen);
            }
            stats.faces_drawn += 1;
        }

        for triangle in &outlines {
            draw_triangle_wireframe(&mut target, triangle, self.wireframe_color);
        }

        log::debug!(
            "{} pass over {} faces: {} drawn, {} culled",
            active,
            self.mesh.face_count(),
            stats.faces_drawn,
            stats.faces_culled
        );

        Frame { buffer, stats }
    }
}

/// Triangles of the flat 2D test scene, in pixel coordinates, with their colors.
pub fn demo_triangles() -> [(Triangle, Color); 3] {
    let tri = |a: (f32, f32), b: (f32, f32), c: (f32, f32)| {
        Triple::new(
            Vec3::new(a.0, a.1, 0.0),
            Vec3::new(b.0, b.1, 0.0),
            Vec3::new(c.0, c.1, 0.0),
        )
    };
    [
        (tri((10.0, 70.0), (50.0, 160.0), (70.0, 80.0)), colors::RED),
        (tri((180.0, 50.0), (150.0, 1.0), (70.0, 180.0)), colors::WHITE),
        (tri((180.0, 150.0), (120.0, 160.0), (130.0, 180.0)), colors::GREEN),
    ]
}

/// Render the flat 2D test scene without lighting or depth.
pub fn render_demo(config: &RenderConfig) -> FrameBuffer {
    let rasterizer = RasterizerDispatcher::new(config.rasterizer);
    let mut buffer = FrameBuffer::new(config.width, config.height, config.background);
    let mut target = RenderTarget::new(&mut buffer);

    for (triangle, color) in demo_triangles() {
        if config.mode.draws_fill() {
            rasterizer.fill_triangle(&triangle, &mut target, color);
        }
        if config.mode.draws_wireframe() {
            draw_triangle_wireframe(&mut target, &triangle, config.wireframe_color);
        }
    }
    buffer
}
