//! Cached color grids.
//!
//! A [`Raster`] is a row-major `width × height` block of [`Color`]s. Widgets
//! pre-render their gradients into one and sample it on pointer input; the
//! software renderer uses one as its framebuffer.

mod png;

pub use png::write_png;

use thiserror::Error;

use crate::coords::{ScaleFactor, Vec2};
use crate::paint::Color;

/// Errors from building or exporting a raster.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The pixel buffer length does not match `width × height`.
    #[error("pixel buffer holds {got} colors, expected {expected}")]
    BufferSize { expected: usize, got: usize },

    /// The raster is too large for the image encoder.
    #[error("raster of {width}×{height} cannot be encoded")]
    Dimensions { width: usize, height: usize },

    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Raster {
    /// A raster filled with `fill`.
    pub fn new(width: usize, height: usize, fill: Color) -> Self {
        Self { width, height, pixels: vec![fill; width * height] }
    }

    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self, RasterError> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(RasterError::BufferSize { expected, got: pixels.len() });
        }
        Ok(Self { width, height, pixels })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)` as raster index bounds.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Native size as a logical-pixel extent.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height { Some(self.pixels[y * self.width + x]) } else { None }
    }

    /// Like [`get`](Self::get) but clamps the index onto the last row/column.
    ///
    /// An empty raster yields [`Color::TRANSPARENT`].
    pub fn get_clamped(&self, x: usize, y: usize) -> Color {
        if self.pixels.is_empty() {
            return Color::TRANSPARENT;
        }
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        self.pixels[y * self.width + x]
    }

    /// Writes one pixel. Returns `false` (and writes nothing) when out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Color) -> bool {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
            true
        } else {
            false
        }
    }

    /// Overwrites every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Iterates one column top to bottom. Empty when `x` is out of bounds.
    pub fn column(&self, x: usize) -> impl Iterator<Item = Color> + '_ {
        let rows = if x < self.width { self.height } else { 0 };
        (0..rows).map(move |y| self.pixels[y * self.width + x])
    }

    /// One row, left to right.
    pub fn row(&self, y: usize) -> Option<&[Color]> {
        (y < self.height).then(|| &self.pixels[y * self.width..(y + 1) * self.width])
    }

    /// Nearest-neighbour sample of this raster stretched over `display`.
    ///
    /// `p` is in display space. No filtering is applied; a scaled blit shows
    /// exactly the colors a pointer lookup at the same position returns.
    pub fn sample_scaled(&self, p: Vec2, display: Vec2) -> Color {
        let scale = ScaleFactor::between(self.size(), display);
        let (x, y) = scale.to_raster_index(p, self.dims());
        self.get_clamped(x, y)
    }

    /// Straight RGBA8 bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.pixels.len() * 4];
        let texels: &mut [[u8; 4]] = bytemuck::cast_slice_mut(&mut out);
        for (texel, color) in texels.iter_mut().zip(&self.pixels) {
            *texel = color.to_rgba_bytes();
        }
        out
    }
}
