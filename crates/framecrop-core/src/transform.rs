//! The user-controlled pan/scale transform.
//!
//! Control values arrive from sliders that already enforce their ranges;
//! values are still clamped here rather than rejected, so an out-of-range
//! input never becomes an error.

use serde::{Deserialize, Serialize};

use crate::config::ScaleRange;
use crate::geometry::{Dimensions, Offset};

/// Pan offset plus scale factor applied to the source image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Translation of the fitted image's center, in viewport units.
    pub offset: Offset,
    /// Scale about the translated center.
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            offset: Offset::ZERO,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn new(offset: Offset, scale: f64) -> Self {
        Self { offset, scale }
    }

    /// Bound the offset to half the viewport on each axis and the scale to
    /// `range`. Non-finite offsets become zero.
    pub fn clamped(self, viewport: Dimensions, range: &ScaleRange) -> Transform {
        let half_w = viewport.width as f64 / 2.0;
        let half_h = viewport.height as f64 / 2.0;

        Transform {
            offset: Offset::new(
                clamp_axis(self.offset.x, half_w),
                clamp_axis(self.offset.y, half_h),
            ),
            scale: range.clamp(self.scale),
        }
    }
}

fn clamp_axis(value: f64, limit: f64) -> f64 {
    if value.is_finite() {
        value.clamp(-limit, limit)
    } else {
        0.0
    }
}
