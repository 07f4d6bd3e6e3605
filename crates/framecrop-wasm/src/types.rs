//! WASM-compatible wrapper types for exported data.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! framecrop types, handling the conversion between Rust and JavaScript
//! data representations.

use framecrop_core::ExportedCrop;
use wasm_bindgen::prelude::*;

/// An exported crop for JavaScript.
///
/// Owns a copy of the cropped pixels and their PNG encoding. Later edits in
/// the editor never change an export that has already been handed out.
///
/// # Memory Management
///
/// The data is stored in WASM memory. `png()` and `pixels()` copy into
/// JavaScript memory. The `free()` method can be called to explicitly
/// release WASM memory, but this is optional as wasm-bindgen's finalizer
/// will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsExportedCrop {
    inner: ExportedCrop,
}

#[wasm_bindgen]
impl JsExportedCrop {
    /// Width in pixels (equals the crop window width).
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Height in pixels (equals the crop window height).
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Size of the PNG encoding in bytes.
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.png.len()
    }

    /// PNG bytes as a Uint8Array (e.g. for a `Blob` download).
    pub fn png(&self) -> Vec<u8> {
        self.inner.png.clone()
    }

    /// Raw RGBA pixels as a Uint8Array.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }

    /// `data:image/png;base64,...` URI, usable directly as an `<img>` src.
    pub fn data_uri(&self) -> String {
        self.inner.data_uri()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl From<ExportedCrop> for JsExportedCrop {
    fn from(inner: ExportedCrop) -> Self {
        Self { inner }
    }
}

/// Convert any displayable error into a JavaScript error string.
pub(crate) fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}
