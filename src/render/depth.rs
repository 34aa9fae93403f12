//! Per-pixel depth record for hidden-surface removal.

/// Z-buffer holding the farthest-along depth accepted at each pixel.
///
/// Every entry starts at negative infinity. Larger values are closer to the
/// viewer, so stored depths only ever grow during a render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct DepthBuffer {
    depths: Vec<f32>,
    width: u32,
    height: u32,
}

impl DepthBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            depths: vec![f32::NEG_INFINITY; width as usize * height as usize],
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

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Stored depth at (x, y), or None if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|i| self.depths[i])
    }

    /// Depth test with update.
    ///
    /// Stores `depth` and returns true only if it is strictly greater than the
    /// stored value, so on equal depths the first writer keeps the pixel.
    /// Out-of-bounds coordinates always fail.
    #[inline]
    pub fn test_and_set(&mut self, x: i32, y: i32, depth: f32) -> bool {
        match self.index(x, y) {
            Some(idx) if depth > self.depths[idx] => {
                self.depths[idx] = depth;
                true
            }
            _ => false,
        }
    }
}
