//! Output pixel grid and the render target view used by the rasterizers.
//!
//! [`FrameBuffer`] owns the color pixels of one render pass and acts as the
//! image sink at the end of it: flip, convert, write. [`RenderTarget`] is a
//! short-lived borrowed view pairing the frame with an optional
//! [`DepthBuffer`], so the rasterizers see one object whether or not depth
//! testing is active.

use std::path::Path;

use image::RgbaImage;

use super::depth::DepthBuffer;
use crate::colors::Color;
use crate::error::{RenderError, Result};

/// A `width × height` grid of RGBA pixels, row 0 first.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Create a frame filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            pixels: vec![background; width as usize * height as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Overwrite the pixel at (x, y). Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Mirror the rows so that row 0 becomes the last row.
    ///
    /// The pipeline rasterizes with y growing upward; image files store the
    /// top scanline first.
    pub fn flip_vertically(&mut self) {
        let width = self.width as usize;
        let height = self.height as usize;
        for row in 0..height / 2 {
            let (upper, lower) = self.pixels.split_at_mut((height - 1 - row) * width);
            upper[row * width..(row + 1) * width].swap_with_slice(&mut lower[..width]);
        }
    }

    /// Raw RGBA bytes in row order.
    pub fn as_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_bytes()).collect()
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let color = self.pixels[y as usize * self.width as usize + x as usize];
            image::Rgba(color.to_bytes())
        })
    }

    /// Encode the frame and write it to `path`. The format follows the file
    /// extension (`.tga`, `.png`, ...).
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_rgba_image()
            .save(path)
            .map_err(|source| RenderError::ImageWrite {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// A view into a frame buffer and, optionally, a depth buffer of the same size.
///
/// Created per pass (or per draw call) to hand both buffers to a rasterizer
/// together.
pub struct RenderTarget<'a> {
    frame: &'a mut FrameBuffer,
    depth: Option<&'a mut DepthBuffer>,
}

impl<'a> RenderTarget<'a> {
    /// A target without depth testing.
    pub fn new(frame: &'a mut FrameBuffer) -> Self {
        Self { frame, depth: None }
    }

    /// A target with depth testing.
    ///
    /// # Panics
    /// Panics if the two buffers differ in size.
    pub fn with_depth(frame: &'a mut FrameBuffer, depth: &'a mut DepthBuffer) -> Self {
        assert_eq!(
            (frame.width(), frame.height()),
            (depth.width(), depth.height()),
            "Depth buffer size doesn't match frame buffer"
        );
        Self {
            frame,
            depth: Some(depth),
        }
    }

    pub fn width(&self) -> u32 {
        self.frame.width()
    }

    pub fn height(&self) -> u32 {
        self.frame.height()
    }

    pub fn has_depth(&self) -> bool {
        self.depth.is_some()
    }

    /// Set a pixel without depth testing.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.frame.set(x, y, color);
    }

    /// Set a pixel subject to the depth test, if this target has a depth buffer.
    ///
    /// With a depth buffer the color is written only when `depth` is strictly
    /// greater than the stored depth. Without one the color is always written.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, depth: f32, color: Color) {
        match self.depth.as_deref_mut() {
            Some(buffer) => {
                if buffer.test_and_set(x, y, depth) {
                    self.frame.set(x, y, color);
                }
            }
            None => self.frame.set(x, y, color),
        }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.frame.get(x, y)
    }
}
