use image::{DynamicImage, GenericImageView, imageops::FilterType};

use crate::error::{ExtractError, Result};

/// Borrowed, validated view over row-major RGBA8 pixel data.
#[derive(Clone, Copy, Debug)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Wrap `data` as a `width`×`height` RGBA image.
    ///
    /// Fails with [`ExtractError::InvalidImageData`] when the length is not a
    /// multiple of 4 or does not equal `width * height * 4`.
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4));

        if data.len() % 4 != 0 || expected != Some(data.len()) {
            return Err(ExtractError::InvalidImageData {
                len: data.len(),
                width,
                height,
            });
        }

        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / 4
    }

    /// Pixels as `[r, g, b, a]` in buffer order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + 'a {
        self.data
            .chunks_exact(4)
            .map(|chunk| [chunk[0], chunk[1], chunk[2], chunk[3]])
    }
}

/// Owned RGBA8 image produced by a [`PixelDecoder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl DecodedImage {
    pub fn as_buffer(&self) -> Result<PixelBuffer<'_>> {
        PixelBuffer::new(self.width, self.height, &self.data)
    }
}

/// Turns encoded image bytes into RGBA pixels.
pub trait PixelDecoder {
    fn decode(&self, input: &[u8]) -> Result<DecodedImage>;
}

/// Decoder backed by the `image` crate (PNG, JPEG, GIF, WebP, ...).
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageDecoder {
    /// Downscale so the longest side is at most this many pixels.
    pub max_side: Option<u32>,
}

impl ImageDecoder {
    pub fn new(max_side: Option<u32>) -> Self {
        Self { max_side }
    }
}

impl PixelDecoder for ImageDecoder {
    fn decode(&self, input: &[u8]) -> Result<DecodedImage> {
        let img = image::load_from_memory(input)?;
        let (orig_w, orig_h) = img.dimensions();
        tracing::trace!(width = orig_w, height = orig_h, "decoded image");

        let working = match self.max_side {
            Some(side) if side < orig_w.max(orig_h) => downscale(&img, side),
            _ => img,
        };

        let rgba = working.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(DecodedImage {
            width,
            height,
            data: rgba.into_raw(),
        })
    }
}

// Nearest neighbour keeps the exact source colors, so tallies stay meaningful.
fn downscale(img: &DynamicImage, max_side: u32) -> DynamicImage {
    let (orig_w, orig_h) = img.dimensions();
    let ratio = max_side as f32 / orig_w.max(orig_h) as f32;
    let w = ((orig_w as f32) * ratio).round().max(1.0) as u32;
    let h = ((orig_h as f32) * ratio).round().max(1.0) as u32;
    tracing::trace!(from_w = orig_w, from_h = orig_h, w, h, "downscaling");
    DynamicImage::ImageRgba8(image::imageops::resize(img, w, h, FilterType::Nearest))
}
