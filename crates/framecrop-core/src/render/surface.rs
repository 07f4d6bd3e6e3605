//! The viewport-sized RGBA drawing surface.
//!
//! A [`Surface`] is the rendered frame: straight (non-premultiplied) RGBA,
//! row-major, 4 bytes per pixel, starting fully transparent. Drawing uses
//! source-over compositing. Rectangle fills honour fractional edges through
//! area coverage, so integer-aligned rectangles are filled exactly and
//! never touch neighbouring pixels.

use super::sample::{sample, InterpolationFilter};
use crate::config::Rgba;
use crate::decode::DecodedImage;
use crate::geometry::{Dimensions, Rect};

/// RGBA pixel buffer the compositor draws into.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    /// A fully transparent surface.
    pub fn new(size: Dimensions) -> Self {
        Self {
            width: size.width,
            height: size.height,
            pixels: vec![0u8; size.pixel_count() * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Raw RGBA bytes, suitable for an `ImageData` upload.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA value at (x, y). Coordinates must be in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = self.index(x, y);
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Fill `rect` with `color`, compositing over the existing content.
    ///
    /// Pixels only partly covered by `rect` receive proportionally less of
    /// the color.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        if rect.is_empty() || color.alpha() == 0 {
            return;
        }

        let (x_start, x_end) = pixel_span(rect.x, rect.right(), self.width);
        let (y_start, y_end) = pixel_span(rect.y, rect.bottom(), self.height);
        let src = color.0.map(f64::from);

        for py in y_start..y_end {
            let cover_y = overlap(py, rect.y, rect.bottom());
            for px in x_start..x_end {
                let coverage = overlap(px, rect.x, rect.right()) * cover_y;
                if coverage > 0.0 {
                    let idx = self.index(px, py);
                    blend_over(&mut self.pixels[idx..idx + 4], src, coverage);
                }
            }
        }
    }

    /// Stroke the outline of `rect` with a line of `line_width` centered on
    /// the rectangle's path.
    ///
    /// The stroke is filled as four bands (top and bottom spanning the full
    /// outer width, left and right between them) so no pixel is painted
    /// twice by overlapping corners.
    pub fn stroke_rect(&mut self, rect: Rect, line_width: f64, color: Rgba) {
        if line_width.is_nan() || line_width <= 0.0 {
            return;
        }

        let half = line_width / 2.0;
        let outer = rect.inflate(half);
        let inner = rect.inflate(-half);

        if inner.is_empty() {
            self.fill_rect(outer, color);
            return;
        }

        let top = Rect::new(outer.x, outer.y, outer.width, line_width);
        let bottom = Rect::new(outer.x, inner.bottom(), outer.width, line_width);
        let left = Rect::new(outer.x, inner.y, line_width, inner.height);
        let right = Rect::new(inner.right(), inner.y, line_width, inner.height);

        for band in [top, bottom, left, right] {
            self.fill_rect(band, color);
        }
    }

    /// Draw `image` stretched into `dest`, clipped to the surface.
    ///
    /// Uses inverse mapping: each destination pixel whose center lies inside
    /// `dest` is mapped back into source coordinates and sampled with
    /// `filter`.
    pub fn draw_image(&mut self, image: &DecodedImage, dest: Rect, filter: InterpolationFilter) {
        if image.is_empty() || dest.is_empty() {
            return;
        }

        let (x_start, x_end) = center_span(dest.x, dest.right(), self.width);
        let (y_start, y_end) = center_span(dest.y, dest.bottom(), self.height);

        let scale_x = image.width as f64 / dest.width;
        let scale_y = image.height as f64 / dest.height;

        for py in y_start..y_end {
            let src_y = (py as f64 + 0.5 - dest.y) * scale_y - 0.5;
            for px in x_start..x_end {
                let src_x = (px as f64 + 0.5 - dest.x) * scale_x - 0.5;
                let color = sample(image, src_x, src_y, filter);
                let idx = self.index(px, py);
                blend_over(&mut self.pixels[idx..idx + 4], color, 1.0);
            }
        }
    }

    /// Copy a `width` x `height` block starting at (x, y) into a new buffer.
    ///
    /// Parts of the block outside the surface come back transparent.
    pub fn copy_region(&self, x: i64, y: i64, width: u32, height: u32) -> Vec<u8> {
        let mut output = vec![0u8; width as usize * height as usize * 4];

        // Horizontal overlap between the block and the surface
        let src_left = x.max(0);
        let src_right = (x + width as i64).min(self.width as i64);
        if src_right <= src_left {
            return output;
        }
        let row_bytes = (src_right - src_left) as usize * 4;
        let dst_col = (src_left - x) as usize * 4;

        // Copy pixel data row by row for efficiency
        for row in 0..height as i64 {
            let src_y = y + row;
            if src_y < 0 || src_y >= self.height as i64 {
                continue;
            }
            let src_start = self.index(src_left as u32, src_y as u32);
            let dst_start = row as usize * width as usize * 4 + dst_col;
            output[dst_start..dst_start + row_bytes]
                .copy_from_slice(&self.pixels[src_start..src_start + row_bytes]);
        }

        output
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

/// Integer pixels touched by the interval `[start, end)`, clipped to `[0, limit)`.
fn pixel_span(start: f64, end: f64, limit: u32) -> (u32, u32) {
    let lo = start.floor().max(0.0);
    let hi = end.ceil().min(limit as f64);
    if hi <= lo {
        (0, 0)
    } else {
        (lo as u32, hi as u32)
    }
}

/// Integer pixels whose centers fall in `[start, end)`, clipped to `[0, limit)`.
fn center_span(start: f64, end: f64, limit: u32) -> (u32, u32) {
    let lo = (start - 0.5).ceil().max(0.0);
    let hi = (end - 0.5).ceil().min(limit as f64);
    if hi <= lo {
        (0, 0)
    } else {
        (lo as u32, hi as u32)
    }
}

/// Length of `[p, p + 1)` covered by `[start, end)`.
#[inline]
fn overlap(p: u32, start: f64, end: f64) -> f64 {
    let p = p as f64;
    ((p + 1.0).min(end) - p.max(start)).max(0.0)
}

/// Source-over composite of straight RGBA `src` (0-255) onto `dst`.
#[inline]
fn blend_over(dst: &mut [u8], src: [f64; 4], coverage: f64) {
    let sa = (src[3] / 255.0) * coverage.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return;
    }

    let da = dst[3] as f64 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        dst.fill(0);
        return;
    }

    for i in 0..3 {
        let c = (src[i] * sa + dst[i] as f64 * da * (1.0 - sa)) / out_a;
        dst[i] = c.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}
