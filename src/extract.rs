use palette::Srgb;

use crate::composite::{composite_over_white, is_near_white};
use crate::config::ExtractorConfig;
use crate::error::{ExtractError, Result};
use crate::format::to_hex;
use crate::pixels::{ImageDecoder, PixelBuffer, PixelDecoder};
use crate::tally::ColorTally;

/// The dominant color of an image and how much of it was found.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MajorityColor {
    /// Composited (opaque) color
    pub color: Srgb<u8>,
    /// Pixels of exactly this color
    pub count: usize,
    /// Eligible pixels: not transparent and not near-white
    pub total: usize,
}

impl MajorityColor {
    pub fn hex(&self) -> String {
        to_hex(self.color)
    }

    /// Fraction of eligible pixels covered by the color.
    pub fn share(&self) -> f64 {
        self.count as f64 / self.total as f64
    }
}

/// Finds the most frequent non-white color of an RGBA image.
///
/// Extraction is a pure pass over the buffer. The extractor holds only its
/// configuration, so one instance can serve any number of concurrent calls.
#[derive(Clone, Debug, Default)]
pub struct MajorityColorExtractor {
    config: ExtractorConfig,
}

impl MajorityColorExtractor {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Tally every eligible pixel and return the leading color if it holds
    /// more than `min_share` of them.
    pub fn extract(&self, pixels: &PixelBuffer<'_>) -> Result<MajorityColor> {
        let tally = self.tally(pixels);

        let Some((color, count)) = tally.leader() else {
            tracing::debug!(pixels = pixels.pixel_count(), "no eligible pixels");
            return Err(ExtractError::NoSignificantColor);
        };
        let total = tally.total();

        tracing::debug!(
            color = %to_hex(color),
            count,
            total,
            distinct = tally.distinct(),
            "majority candidate"
        );

        if count as f64 / total as f64 <= self.config.min_share {
            return Err(ExtractError::NoSignificantColor);
        }

        Ok(MajorityColor { color, count, total })
    }

    /// Decode `input` with `decoder`, then [`extract`](Self::extract).
    pub fn extract_image(&self, decoder: &dyn PixelDecoder, input: &[u8]) -> Result<MajorityColor> {
        let decoded = decoder.decode(input)?;
        self.extract(&decoded.as_buffer()?)
    }

    /// Decode with the `image` crate, honoring the configured `max_side`.
    pub fn extract_encoded(&self, input: &[u8]) -> Result<MajorityColor> {
        self.extract_image(&ImageDecoder::new(self.config.max_side), input)
    }

    fn tally(&self, pixels: &PixelBuffer<'_>) -> ColorTally {
        let mut tally = ColorTally::new();
        for [r, g, b, a] in pixels.pixels() {
            let Some(color) = composite_over_white(r, g, b, a) else {
                continue;
            };
            if is_near_white(color, self.config.near_white_threshold) {
                continue;
            }
            tally.record(color);
        }
        tally
    }
}

/// Majority color of `pixels` as `#rrggbb`, using the default configuration.
pub fn extract_majority_color(pixels: &PixelBuffer<'_>) -> Result<String> {
    MajorityColorExtractor::default()
        .extract(pixels)
        .map(|m| m.hex())
}
