//! Dominant non-white color of an image.
//!
//! Pixels are composited onto white, fully transparent and near-white pixels
//! are dropped, and the most frequent remaining color is reported when it
//! covers more than 10% of them. The browser build exposes this through
//! `wasm-bindgen`; native callers use [`MajorityColorExtractor`] directly.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

pub mod composite;
pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod pixels;
pub mod preview;
pub mod tally;

pub use config::ExtractorConfig;
pub use error::{ExtractError, Result};
pub use extract::{MajorityColor, MajorityColorExtractor, extract_majority_color};
pub use pixels::{DecodedImage, ImageDecoder, PixelBuffer, PixelDecoder};
pub use preview::SwatchPreview;

fn to_js_error(err: ExtractError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn extractor_for(max_side: Option<u32>) -> std::result::Result<MajorityColorExtractor, JsValue> {
    MajorityColorExtractor::new(ExtractorConfig {
        max_side,
        ..ExtractorConfig::default()
    })
    .map_err(to_js_error)
}

/// `{ hex, rgba, count, total }` where `rgba` is the 10%-opacity preview.
fn to_js_result(majority: &MajorityColor) -> std::result::Result<Object, JsValue> {
    let preview = SwatchPreview::new(majority).map_err(to_js_error)?;

    let result = Object::new();
    Reflect::set(&result, &JsValue::from_str("hex"), &JsValue::from_str(&preview.original))?;
    Reflect::set(&result, &JsValue::from_str("rgba"), &JsValue::from_str(&preview.tinted))?;
    Reflect::set(&result, &JsValue::from_str("count"), &JsValue::from_f64(majority.count as f64))?;
    Reflect::set(&result, &JsValue::from_str("total"), &JsValue::from_f64(majority.total as f64))?;
    Ok(result)
}

/// Decode an uploaded image file and find its majority color.
///
/// Rejects with "no significant non-white color found in the image" when no
/// color qualifies; callers typically clear the swatch in that case.
#[wasm_bindgen(js_name = majorityColor)]
pub fn majority_color(input: Vec<u8>, max_side: Option<u32>) -> std::result::Result<Object, JsValue> {
    let majority = extractor_for(max_side)?
        .extract_encoded(&input)
        .map_err(to_js_error)?;
    to_js_result(&majority)
}

/// Majority color of already-decoded RGBA data, e.g. a canvas `ImageData`.
#[wasm_bindgen(js_name = majorityColorFromRgba)]
pub fn majority_color_from_rgba(width: u32, height: u32, data: Vec<u8>) -> std::result::Result<Object, JsValue> {
    let pixels = PixelBuffer::new(width, height, &data).map_err(to_js_error)?;
    let majority = MajorityColorExtractor::default()
        .extract(&pixels)
        .map_err(to_js_error)?;
    to_js_result(&majority)
}

#[wasm_bindgen(js_name = hexToRgba)]
pub fn hex_to_rgba(hex: &str, alpha: f32) -> std::result::Result<String, JsValue> {
    format::to_rgba(hex, alpha).map_err(to_js_error)
}

/// Decode `input` and extract its majority color with `config`.
#[cfg(not(target_arch = "wasm32"))]
pub fn majority_color_bytes(input: &[u8], config: &ExtractorConfig) -> Result<MajorityColor> {
    MajorityColorExtractor::new(config.clone())?.extract_encoded(input)
}
