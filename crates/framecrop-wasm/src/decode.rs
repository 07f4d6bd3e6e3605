//! Input-boundary helpers for the file picker.

use framecrop_core::decode;
use wasm_bindgen::prelude::*;

/// Check whether a picked file's MIME type should be offered to the editor.
///
/// Matches the picker's `accept="image/*"` filter. Whether the bytes really
/// decode is only known once `JsCropEditor.finish_load` runs.
///
/// # Example
///
/// ```typescript
/// const file = input.files[0];
/// if (file && is_supported_mime(file.type)) {
///   const ticket = editor.begin_load();
///   editor.finish_load(ticket, new Uint8Array(await file.arrayBuffer()));
/// }
/// ```
#[wasm_bindgen]
pub fn is_supported_mime(mime: &str) -> bool {
    decode::is_supported_mime(mime)
}
