//! Crop export: copy the pixels under the crop window into their own image.
//!
//! The exported buffer is sized exactly to the crop window and owns its
//! data, so later renders of the surface cannot alter an export that has
//! already been produced.

use log::info;

use crate::encode::{encode_png, to_data_uri, EncodeError};
use crate::geometry::{Dimensions, Rect};
use crate::render::Surface;

/// A cropped, encoded image.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedCrop {
    /// Width in pixels (equals the crop window width).
    pub width: u32,
    /// Height in pixels (equals the crop window height).
    pub height: u32,
    /// Straight RGBA pixels, row-major.
    pub pixels: Vec<u8>,
    /// Lossless PNG encoding of `pixels`.
    pub png: Vec<u8>,
}

impl ExportedCrop {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// The PNG as a `data:image/png;base64,...` URI.
    pub fn data_uri(&self) -> String {
        to_data_uri(&self.png)
    }
}

/// Extract the region under `mask` from a rendered `surface` and encode it.
///
/// The region's origin is the mask origin rounded to whole pixels; its size
/// is the mask size. The surface must already hold the current frame.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for an empty mask, or
/// `EncodeError::EncodingFailed` if PNG encoding fails.
pub fn export_crop(surface: &Surface, mask: &Rect) -> Result<ExportedCrop, EncodeError> {
    let x = mask.x.round() as i64;
    let y = mask.y.round() as i64;
    let width = mask.width.round().max(0.0) as u32;
    let height = mask.height.round().max(0.0) as u32;

    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let pixels = surface.copy_region(x, y, width, height);
    let png = encode_png(&pixels, width, height)?;

    info!(
        "exported {}x{} crop at ({}, {}) as {} PNG bytes",
        width,
        height,
        x,
        y,
        png.len()
    );

    Ok(ExportedCrop {
        width,
        height,
        pixels,
        png,
    })
}
