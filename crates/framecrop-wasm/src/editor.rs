//! WASM bindings for the interactive crop editor.
//!
//! [`JsCropEditor`] wraps a core `EditorSession`. The page's controls call
//! the setters; after each call the frame is already re-rendered and can be
//! uploaded to a canvas with `putImageData`.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const editor = new JsCropEditor();
//!
//! // File picker: take the ticket on selection, before the async read, so
//! // a slow read of an older selection cannot replace a newer one
//! const ticket = editor.begin_load();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! if (editor.finish_load(ticket, bytes)) {
//!   ctx.putImageData(
//!     new ImageData(editor.frame_clamped(), editor.viewport_width, editor.viewport_height),
//!     0, 0,
//!   );
//! }
//!
//! // Sliders
//! editor.set_offset(100, 0);
//! editor.set_scale(1.25);
//!
//! // Crop button
//! img.src = editor.export_data_uri();
//! ```

use framecrop_core::{EditorConfig, EditorSession, LoadOutcome, LoadTicket};
use wasm_bindgen::prelude::*;

use crate::types::{js_error, JsExportedCrop};

/// Crop editor session for JavaScript.
#[wasm_bindgen]
pub struct JsCropEditor {
    session: EditorSession,
}

#[wasm_bindgen]
impl JsCropEditor {
    /// Create an editor with the default 960x540 viewport and 640x360 crop.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<JsCropEditor, JsValue> {
        Self::from_config(EditorConfig::default())
    }

    /// Create an editor from a (partial) configuration object.
    ///
    /// Missing fields take their defaults, e.g.
    /// `{ mask: { width: 320, height: 240 } }`.
    pub fn with_config(config: JsValue) -> Result<JsCropEditor, JsValue> {
        let config: EditorConfig = serde_wasm_bindgen::from_value(config).map_err(js_error)?;
        Self::from_config(config)
    }

    /// The effective configuration as a plain object.
    pub fn config(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.session.config()).map_err(js_error)
    }

    /// Register a file selection and return its ticket.
    ///
    /// Call this when the file is picked, before reading it. Every earlier
    /// ticket is superseded.
    pub fn begin_load(&mut self) -> u32 {
        self.session.begin_load().id()
    }

    /// Decode the bytes read for `ticket`.
    ///
    /// Returns `false` if the ticket was superseded, `true` once the image
    /// is active and rendered. Decode failures are returned as errors.
    pub fn finish_load(&mut self, ticket: u32, bytes: Vec<u8>) -> Result<bool, JsValue> {
        let outcome = self
            .session
            .finish_load(LoadTicket::from_raw(ticket), bytes)
            .map_err(js_error)?;

        match outcome {
            LoadOutcome::Loaded(_) => Ok(true),
            LoadOutcome::Superseded => Ok(false),
        }
    }

    /// Decode and activate an image in one call.
    pub fn load_image(&mut self, bytes: Vec<u8>) -> Result<(), JsValue> {
        self.session.load_image(bytes).map(|_| ()).map_err(js_error)
    }

    /// Set the pan offset; values are clamped to half the viewport.
    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.session.set_offset(x, y);
    }

    /// Set the scale; values are clamped to the configured range.
    pub fn set_scale(&mut self, scale: f64) {
        self.session.set_scale(scale);
    }

    #[wasm_bindgen(getter)]
    pub fn offset_x(&self) -> f64 {
        self.session.transform().offset.x
    }

    #[wasm_bindgen(getter)]
    pub fn offset_y(&self) -> f64 {
        self.session.transform().offset.y
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.session.transform().scale
    }

    #[wasm_bindgen(getter)]
    pub fn has_image(&self) -> bool {
        self.session.has_image()
    }

    #[wasm_bindgen(getter)]
    pub fn viewport_width(&self) -> u32 {
        self.session.config().viewport.width
    }

    #[wasm_bindgen(getter)]
    pub fn viewport_height(&self) -> u32 {
        self.session.config().viewport.height
    }

    #[wasm_bindgen(getter)]
    pub fn mask_width(&self) -> u32 {
        self.session.config().mask.width
    }

    #[wasm_bindgen(getter)]
    pub fn mask_height(&self) -> u32 {
        self.session.config().mask.height
    }

    /// Rendered frame as RGBA bytes; empty when no image is loaded.
    pub fn frame_pixels(&self) -> Vec<u8> {
        self.session
            .frame()
            .map(|frame| frame.pixels().to_vec())
            .unwrap_or_default()
    }

    /// Rendered frame as a `Uint8ClampedArray` for `new ImageData(...)`.
    pub fn frame_clamped(&self) -> js_sys::Uint8ClampedArray {
        match self.session.frame() {
            Some(frame) => js_sys::Uint8ClampedArray::from(frame.pixels()),
            None => js_sys::Uint8ClampedArray::new_with_length(0),
        }
    }

    /// Crop the current frame to the mask.
    pub fn export(&self) -> Result<JsExportedCrop, JsValue> {
        self.session
            .export()
            .map(JsExportedCrop::from)
            .map_err(js_error)
    }

    /// Crop and return the PNG bytes.
    pub fn export_png(&self) -> Result<Vec<u8>, JsValue> {
        self.session
            .export()
            .map(|crop| crop.png)
            .map_err(js_error)
    }

    /// Crop and return a `data:image/png;base64,...` URI.
    pub fn export_data_uri(&self) -> Result<String, JsValue> {
        self.session
            .export()
            .map(|crop| crop.data_uri())
            .map_err(js_error)
    }
}

impl JsCropEditor {
    fn from_config(config: EditorConfig) -> Result<JsCropEditor, JsValue> {
        let session = EditorSession::new(config).map_err(js_error)?;
        Ok(JsCropEditor { session })
    }
}


/// WASM-specific tests that require JsValue.
///
/// Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_export_without_image_errors() {
        let editor = JsCropEditor::new().unwrap();
        assert!(editor.export().is_err());
        assert!(editor.export_data_uri().is_err());
    }

    #[wasm_bindgen_test]
    fn test_invalid_bytes_error() {
        let mut editor = JsCropEditor::new().unwrap();
        assert!(editor.load_image(vec![1, 2, 3]).is_err());
        assert!(!editor.has_image());
    }

    #[wasm_bindgen_test]
    fn test_with_partial_config() {
        let config = js_sys::Object::new();
        let mask = js_sys::Object::new();
        js_sys::Reflect::set(&mask, &"width".into(), &320.into()).unwrap();
        js_sys::Reflect::set(&mask, &"height".into(), &240.into()).unwrap();
        js_sys::Reflect::set(&config, &"mask".into(), &mask).unwrap();

        let editor = JsCropEditor::with_config(config.into()).unwrap();
        assert_eq!(editor.mask_width(), 320);
        assert_eq!(editor.viewport_width(), 960);
    }

    #[wasm_bindgen_test]
    fn test_oversized_mask_rejected() {
        let config = js_sys::Object::new();
        let mask = js_sys::Object::new();
        js_sys::Reflect::set(&mask, &"width".into(), &2000.into()).unwrap();
        js_sys::Reflect::set(&mask, &"height".into(), &240.into()).unwrap();
        js_sys::Reflect::set(&config, &"mask".into(), &mask).unwrap();

        assert!(JsCropEditor::with_config(config.into()).is_err());
    }

    #[wasm_bindgen_test]
    fn test_huge_viewport_rejected() {
        let config = js_sys::Object::new();
        let viewport = js_sys::Object::new();
        js_sys::Reflect::set(&viewport, &"width".into(), &100_000.into()).unwrap();
        js_sys::Reflect::set(&viewport, &"height".into(), &100_000.into()).unwrap();
        js_sys::Reflect::set(&config, &"viewport".into(), &viewport).unwrap();

        assert!(JsCropEditor::with_config(config.into()).is_err());
    }

    #[wasm_bindgen_test]
    fn test_frame_clamped_length() {
        let mut editor = JsCropEditor::new().unwrap();
        assert_eq!(editor.frame_clamped().length(), 0);

        let pixels = vec![200u8; 16 * 9 * 4];
        let png = framecrop_core::encode_png(&pixels, 16, 9).unwrap();
        editor.load_image(png).unwrap();
        assert_eq!(editor.frame_clamped().length(), 960 * 540 * 4);
    }
}
