//! WASM bindings for browser-based ticket rendering.
//!
//! This module exposes the render and parse entry points to JavaScript via
//! wasm-bindgen. The boundary is strings both ways: raw editor text in,
//! SVG markup out, and back.

use wasm_bindgen::prelude::*;

use crate::document::Document;
use crate::options::RenderOptions;
use crate::svg::{parse_svg, render_svg};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Render raw ticket text to SVG markup.
///
/// Takes editor text (header line followed by `- ` items) and returns the
/// markup for the default profile. Never fails; empty input renders an
/// empty ticket.
#[wasm_bindgen]
pub fn text_to_svg(text: &str) -> String {
    let doc = Document::from_text(text);
    render_svg(&doc, &RenderOptions::default())
}

/// Parse SVG markup back to raw ticket text.
///
/// Returns the header line followed by one `- ` line per item.
#[wasm_bindgen]
pub fn svg_to_text(markup: &str) -> Result<String, JsValue> {
    let doc = parse_svg(markup).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(doc.to_text())
}
