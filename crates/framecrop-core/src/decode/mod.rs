//! Image decoding for the input boundary.
//!
//! The file picker hands the editor raw file bytes; this module turns them
//! into a [`DecodedImage`] with straight RGBA pixels and EXIF orientation
//! already applied. Decoding is a single attempt with no retry.
//!
//! # Examples
//!
//! ```ignore
//! use framecrop_core::decode::{decode_image, is_supported_mime};
//!
//! assert!(is_supported_mime("image/jpeg"));
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod raster;
mod types;

pub use raster::{decode_image, is_supported_mime};
pub use types::{DecodeError, DecodedImage, Orientation};
