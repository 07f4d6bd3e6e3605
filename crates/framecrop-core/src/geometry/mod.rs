//! Geometry engine: pure functions mapping pan/scale to draw rectangles.
//!
//! Everything in this module is side-effect free arithmetic in viewport
//! pixel units. Inputs are assumed already validated (positive image and
//! viewport dimensions); nothing here returns an error.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner of the viewport
//! - x grows to the right, y grows downward
//! - Rectangles are `(x, y, width, height)` in real-valued units
//!
//! # Pipeline
//!
//! 1. [`fit`] sizes the image to the viewport, preserving aspect ratio
//! 2. [`place`] centers the fitted size, translates it by the offset and
//!    scales it about its (offset) center
//! 3. [`mask_rect`] / [`mask_complement`] describe the crop window and the
//!    dimmed area around it

mod fit;
mod mask;
mod types;

pub use fit::{fit, place};
pub use mask::{mask_complement, mask_rect};
pub use types::{Dimensions, Offset, Rect};
