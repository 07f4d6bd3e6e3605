//! Editor configuration.
//!
//! The viewport, crop mask and control ranges are fixed for the lifetime of
//! a session. Defaults reproduce the reference editor: a 960x540 viewport,
//! a centered 640x360 crop window, scale in `[0.1, 2.0]`, a 50% black dim
//! and a thin red outline just outside the crop window.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Dimensions;
use crate::render::InterpolationFilter;

/// Largest viewport accepted, in pixels (a 64 MiB RGBA surface).
pub const MAX_VIEWPORT_PIXELS: u64 = 4096 * 4096;

/// Errors reported by [`EditorConfig::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Viewport or mask has a zero side.
    #[error("{name} dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions {
        name: &'static str,
        width: u32,
        height: u32,
    },

    /// Viewport surface would exceed [`MAX_VIEWPORT_PIXELS`].
    #[error("Viewport {width}x{height} exceeds the {max} pixel limit")]
    ViewportTooLarge { width: u32, height: u32, max: u64 },

    /// Mask does not fit inside the viewport.
    #[error("Crop mask {mask_w}x{mask_h} exceeds viewport {view_w}x{view_h}")]
    MaskExceedsViewport {
        mask_w: u32,
        mask_h: u32,
        view_w: u32,
        view_h: u32,
    },

    /// Scale range is not a positive, finite, ordered interval.
    #[error("Invalid scale range [{min}, {max}]")]
    InvalidScaleRange { min: f64, max: f64 },

    /// Outline stroke width must be positive and finite.
    #[error("Invalid outline width: {0}")]
    InvalidOutlineWidth(f64),

    /// Outline gap must keep the whole stroke outside the crop window.
    #[error("Outline gap {gap} must be at least half the outline width {width}")]
    InvalidOutlineGap { gap: f64, width: f64 },
}

/// Straight (non-premultiplied) RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba([0, 0, 0, 0]);
    pub const RED: Rgba = Rgba([255, 0, 0, 255]);

    /// Black at `rgba(0, 0, 0, 0.5)`.
    pub const HALF_BLACK: Rgba = Rgba([0, 0, 0, 128]);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    pub fn alpha(self) -> u8 {
        self.0[3]
    }
}

/// Allowed scale interval (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleRange {
    pub min: f64,
    pub max: f64,
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self { min: 0.1, max: 2.0 }
    }
}

impl ScaleRange {
    /// Clamp `scale` into the range. NaN and infinities fall back to 1.0
    /// (itself clamped).
    pub fn clamp(&self, scale: f64) -> f64 {
        let scale = if scale.is_finite() { scale } else { 1.0 };
        scale.max(self.min).min(self.max)
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min > 0.0 && self.min <= self.max
    }
}

/// Appearance of the dimming mask and the crop outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskStyle {
    /// Fill for the four strips around the crop window.
    pub dim_color: Rgba,
    /// Stroke color of the crop outline.
    pub outline_color: Rgba,
    /// Stroke width in viewport units.
    pub outline_width: f64,
    /// Distance the outline path sits outside the crop window.
    pub outline_gap: f64,
}

impl Default for MaskStyle {
    fn default() -> Self {
        Self {
            dim_color: Rgba::HALF_BLACK,
            outline_color: Rgba::RED,
            outline_width: 0.5,
            outline_gap: 1.0,
        }
    }
}

/// Session-wide editor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Editing surface size.
    pub viewport: Dimensions,
    /// Crop window size; centered in the viewport.
    pub mask: Dimensions,
    /// Range accepted for the scale control.
    pub scale_range: ScaleRange,
    /// Mask and outline appearance.
    pub style: MaskStyle,
    /// Resampling used when drawing the image onto the surface.
    pub filter: InterpolationFilter,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            viewport: Dimensions::new(960, 540),
            mask: Dimensions::new(640, 360),
            scale_range: ScaleRange::default(),
            style: MaskStyle::default(),
            filter: InterpolationFilter::default(),
        }
    }
}

impl EditorConfig {
    /// Check the invariants the renderer and exporter rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, dims) in [("Viewport", self.viewport), ("Mask", self.mask)] {
            if dims.is_empty() {
                return Err(ConfigError::EmptyDimensions {
                    name,
                    width: dims.width,
                    height: dims.height,
                });
            }
        }

        let area = u64::from(self.viewport.width) * u64::from(self.viewport.height);
        if area > MAX_VIEWPORT_PIXELS {
            return Err(ConfigError::ViewportTooLarge {
                width: self.viewport.width,
                height: self.viewport.height,
                max: MAX_VIEWPORT_PIXELS,
            });
        }

        if !self.viewport.contains(self.mask) {
            return Err(ConfigError::MaskExceedsViewport {
                mask_w: self.mask.width,
                mask_h: self.mask.height,
                view_w: self.viewport.width,
                view_h: self.viewport.height,
            });
        }

        if !self.scale_range.is_valid() {
            return Err(ConfigError::InvalidScaleRange {
                min: self.scale_range.min,
                max: self.scale_range.max,
            });
        }

        let width = self.style.outline_width;
        if !(width.is_finite() && width > 0.0) {
            return Err(ConfigError::InvalidOutlineWidth(width));
        }

        // The stroke is centered on the inflated mask, so its inner edge sits
        // at gap - width / 2 outside the crop window
        let gap = self.style.outline_gap;
        if !(gap.is_finite() && gap >= width / 2.0) {
            return Err(ConfigError::InvalidOutlineGap { gap, width });
        }

        Ok(())
    }
}
