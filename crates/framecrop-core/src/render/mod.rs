//! Rendering: the drawing surface, image resampling and the compositor.
//!
//! The [`Compositor`] turns (image, offset, scale) into a viewport-sized
//! [`Surface`]. Rendering is synchronous and deterministic.

mod compositor;
mod sample;
mod surface;

pub use compositor::Compositor;
pub use sample::{sample, InterpolationFilter};
pub use surface::Surface;
