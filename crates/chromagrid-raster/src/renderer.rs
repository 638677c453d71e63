//! The fill-operation executor: a pixel buffer plus the loops that fill
//! it.
//!
//! Rectangle edges arrive as f32 canvas coordinates. Each edge is rounded
//! to a pixel boundary once; adjacent cells share their fractional edges,
//! so rounding the shared value keeps the tiling gap-free and
//! overlap-free.

use std::path::Path;

use anyhow::Result;
use chromagrid_color::Rgb;
use chromagrid_paint::{CellPaint, FillOp, Gradient, Rect};
use image::{ImageBuffer, Rgba, RgbaImage};

use crate::gradient;

/// Software renderer that executes fill operations to an RGBA buffer.
///
/// The renderer is stateless with respect to specs and grids - it only
/// knows how to execute fill operations against its own pixels.
pub struct Renderer {
    /// RGBA pixel buffer
    buffer: RgbaImage,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
}

impl Renderer {
    /// Create a renderer with an opaque white canvas.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let buffer = ImageBuffer::from_pixel(width, height, Rgba([255, 255, 255, 255]));
        Self {
            buffer,
            width,
            height,
        }
    }

    /// Canvas width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Borrow the pixel buffer.
    #[must_use]
    pub const fn buffer(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Consume the renderer, returning the pixel buffer.
    #[must_use]
    pub fn into_buffer(self) -> RgbaImage {
        self.buffer
    }

    /// Execute painted cells, in order.
    pub fn render(&mut self, cells: &[CellPaint]) {
        for cell in cells {
            for op in &cell.ops {
                self.execute_op(op);
            }
        }
    }

    /// Execute a single fill operation.
    fn execute_op(&mut self, op: &FillOp) {
        match op {
            FillOp::Flat { rect, color } => self.fill_rect(rect, *color),
            FillOp::Gradient { rect, gradient } => self.fill_gradient(rect, gradient),
        }
    }

    /// Fill a rectangle with one opaque color, clipped to the buffer.
    fn fill_rect(&mut self, rect: &Rect, color: Rgb) {
        let rgba = Rgba([color.r, color.g, color.b, 255]);
        let (x0, x1) = pixel_span(rect.x, rect.x + rect.width, self.width);
        let (y0, y1) = pixel_span(rect.y, rect.y + rect.height, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                self.buffer.put_pixel(px, py, rgba);
            }
        }
    }

    /// Fill a rectangle by evaluating the gradient at each pixel center.
    #[allow(clippy::cast_precision_loss)]
    fn fill_gradient(&mut self, rect: &Rect, gradient: &Gradient) {
        let (x0, x1) = pixel_span(rect.x, rect.x + rect.width, self.width);
        let (y0, y1) = pixel_span(rect.y, rect.y + rect.height, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                let color = gradient::color_at(gradient, px as f32 + 0.5, py as f32 + 0.5);
                self.buffer
                    .put_pixel(px, py, Rgba([color.r, color.g, color.b, 255]));
            }
        }
    }

    /// Save the canvas to a file; the format follows the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be encoded or written.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.buffer
            .save(path)
            .map_err(|e| anyhow::anyhow!("failed to save image to '{}': {e}", path.display()))?;
        Ok(())
    }
}

/// Clamp a half-open f32 extent to a span of whole pixel rows or columns.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn pixel_span(low: f32, high: f32, limit: u32) -> (u32, u32) {
    let low = low.round().max(0.0) as u32;
    let high = (high.round().max(0.0) as u32).min(limit);
    (low.min(high), high)
}
