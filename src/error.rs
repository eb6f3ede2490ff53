use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("pixel buffer length {len} does not match dimensions {width}x{height}")]
    InvalidImageData {
        len: usize,
        width: u32,
        height: u32,
    },

    /// Expected outcome: every pixel was transparent or near-white, or no
    /// color reached the minimum share.
    #[error("no significant non-white color found in the image")]
    NoSignificantColor,

    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    #[error("invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Decoding the input, or encoding a swatch, failed.
    #[error("image codec error: {0}")]
    Decode(#[from] image::ImageError),
}

impl ExtractError {
    pub(crate) fn invalid_parameter(parameter: &str, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.to_string(),
            value: value.to_string(),
        }
    }

    /// True for the "no significant color" outcome, which callers usually
    /// render as an empty state rather than a failure.
    pub fn is_no_color(&self) -> bool {
        matches!(self, ExtractError::NoSignificantColor)
    }
}
