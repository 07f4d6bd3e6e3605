//! Image encoding for the output boundary.
//!
//! Exported crops are encoded losslessly as PNG and can be handed to the
//! host either as raw bytes or as a `data:` URI.
//!
//! # Examples
//!
//! ```ignore
//! use framecrop_core::encode::{encode_png, to_data_uri};
//!
//! let pixels = vec![0u8; 640 * 360 * 4];
//! let png = encode_png(&pixels, 640, 360).unwrap();
//! let uri = to_data_uri(&png);
//! ```

mod png;

pub use png::{encode_png, to_data_uri, EncodeError, PNG_MIME};
