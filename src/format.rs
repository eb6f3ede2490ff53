use palette::Srgb;

use crate::error::{ExtractError, Result};

/// `#rrggbb`, lowercase, two digits per channel.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Parse a 6-digit hex color, with or without the leading `#`.
pub fn parse_hex(hex: &str) -> Result<Srgb<u8>> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ExtractError::InvalidHex(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ExtractError::InvalidHex(hex.to_string()))
    };
    Ok(Srgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// CSS `rgba(r, g, b, alpha)` for a hex color and an opacity in `0.0..=1.0`.
pub fn to_rgba(hex: &str, alpha: f32) -> Result<String> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(ExtractError::invalid_parameter("alpha", alpha));
    }
    let c = parse_hex(hex)?;
    Ok(format!("rgba({}, {}, {}, {})", c.red, c.green, c.blue, alpha))
}
