use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use palette::Srgb;
use serde::Serialize;

use crate::error::{ExtractError, Result};
use crate::extract::MajorityColor;
use crate::format::{to_hex, to_rgba};

/// Opacity of the tinted swatch shown next to the original color.
pub const PREVIEW_ALPHA: f32 = 0.1;

/// Display strings for a majority color swatch pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SwatchPreview {
    /// `#rrggbb`
    pub original: String,
    /// `rgba(r, g, b, 0.1)`
    pub tinted: String,
}

impl SwatchPreview {
    pub fn new(majority: &MajorityColor) -> Result<Self> {
        let original = to_hex(majority.color);
        let tinted = to_rgba(&original, PREVIEW_ALPHA)?;
        Ok(Self { original, tinted })
    }
}

/// PNG-encode a `size`×`size` square of `color` at opacity `alpha`.
pub fn render_swatch_png(color: Srgb<u8>, alpha: f32, size: u32) -> Result<Vec<u8>> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(ExtractError::invalid_parameter("alpha", alpha));
    }
    if size == 0 {
        return Err(ExtractError::invalid_parameter("size", size));
    }

    let a = (alpha * 255.0).round() as u8;
    let swatch = RgbaImage::from_pixel(size, size, Rgba([color.red, color.green, color.blue, a]));

    let mut buf = Vec::new();
    {
        let mut cursor = Cursor::new(&mut buf);
        DynamicImage::ImageRgba8(swatch).write_to(&mut cursor, ImageFormat::Png)?;
    }
    Ok(buf)
}
