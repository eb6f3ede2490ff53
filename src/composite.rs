use palette::Srgb;

/// Channels above this value on all three axes count as "white".
pub const NEAR_WHITE_THRESHOLD: u8 = 240;

/// Blend an RGBA pixel onto a white background.
///
/// Returns `None` for fully transparent pixels, which carry no color at all.
/// Each channel becomes `round(c * alpha + 255 * (1 - alpha))` with
/// `alpha = a / 255`.
#[inline]
pub fn composite_over_white(r: u8, g: u8, b: u8, a: u8) -> Option<Srgb<u8>> {
    if a == 0 {
        return None;
    }

    let alpha = a as f64 / 255.0;
    let blend = |c: u8| -> u8 { (c as f64 * alpha + 255.0 * (1.0 - alpha)).round() as u8 };

    Some(Srgb::new(blend(r), blend(g), blend(b)))
}

/// True when every channel exceeds `threshold`.
#[inline]
pub fn is_near_white(color: Srgb<u8>, threshold: u8) -> bool {
    color.red > threshold && color.green > threshold && color.blue > threshold
}
