//! Framecrop WASM - WebAssembly bindings for the crop editor
//!
//! This crate exposes the framecrop-core editing session to JavaScript /
//! TypeScript. The page owns the file picker, sliders and buttons; this
//! crate owns the preview frame and produces the exported PNG.
//!
//! # Module Structure
//!
//! - `editor` - `JsCropEditor`, the session handle used by the page
//! - `types` - WASM-compatible wrapper types for exported crops
//! - `decode` - File picker helpers
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropEditor } from '@framecrop/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const editor = new JsCropEditor();
//! editor.load_image(new Uint8Array(await file.arrayBuffer()));
//! editor.set_scale(1.5);
//! const png = editor.export_png();
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod editor;
mod types;

// Re-export public types
pub use decode::is_supported_mime;
pub use editor::JsCropEditor;
pub use types::JsExportedCrop;

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&message),
            log::Level::Warn => web_sys::console::warn_1(&message),
            log::Level::Info => web_sys::console::info_1(&message),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // A logger may already be installed by the host; keep it
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
}

/// Enable or disable debug-level logging (per-render details).
#[wasm_bindgen]
pub fn set_debug_logging(enabled: bool) {
    log::set_max_level(if enabled {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
