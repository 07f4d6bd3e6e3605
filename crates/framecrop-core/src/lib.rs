//! Framecrop Core - pan/scale preview compositing and masked crop export
//!
//! This crate provides the editing engine behind a fixed-size crop editor:
//! the user pans and scales an image inside a viewport overlaid with a
//! fixed, centered crop window, and exports exactly what lies under that
//! window as a PNG.
//!
//! # Module Structure
//!
//! - `geometry` - Aspect-preserving fit, pan/scale placement, mask strips
//! - `transform` - The user-controlled offset + scale, with clamping
//! - `config` - Viewport, mask, control ranges and mask appearance
//! - `decode` - File bytes to RGBA source image (EXIF orientation applied)
//! - `render` - Drawing surface, resampling and the compositor
//! - `encode` - PNG encoding and data URIs
//! - `export` - Extracting the crop window from a rendered frame
//! - `session` - State owner tying the pieces together
//!
//! # Usage
//!
//! ```ignore
//! use framecrop_core::{EditorConfig, EditorSession};
//!
//! let mut session = EditorSession::new(EditorConfig::default())?;
//! session.load_image(std::fs::read("photo.jpg")?)?;
//! session.set_offset(100.0, 0.0);
//! session.set_scale(1.25);
//! let crop = session.export()?;
//! std::fs::write("crop.png", &crop.png)?;
//! ```

pub mod config;
pub mod decode;
pub mod encode;
pub mod export;
pub mod geometry;
pub mod render;
pub mod session;
pub mod transform;

pub use config::{ConfigError, EditorConfig, MaskStyle, Rgba, ScaleRange, MAX_VIEWPORT_PIXELS};
pub use decode::{decode_image, is_supported_mime, DecodeError, DecodedImage};
pub use encode::{encode_png, to_data_uri, EncodeError};
pub use export::{export_crop, ExportedCrop};
pub use geometry::{fit, mask_complement, mask_rect, place, Dimensions, Offset, Rect};
pub use render::{Compositor, InterpolationFilter, Surface};
pub use session::{EditorSession, LoadOutcome, LoadTicket, SessionError};
pub use transform::Transform;
