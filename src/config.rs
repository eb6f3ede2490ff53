//! Tunable parameters for majority color extraction.
//!
//! The defaults select a color only when it covers more than 10% of the
//! eligible pixels, and treat any composited color whose channels all exceed
//! 240 as background. Configuration can be built in code or loaded from JSON:
//!
//! ```no_run
//! use majority_color_wasm::ExtractorConfig;
//! use std::path::Path;
//!
//! let config = ExtractorConfig::from_json_file(Path::new("majority.json"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::composite::NEAR_WHITE_THRESHOLD;
use crate::error::{ExtractError, Result};

/// Default minimum share of eligible pixels the majority color must exceed.
pub const DEFAULT_MIN_SHARE: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Composited colors with all channels above this are skipped
    pub near_white_threshold: u8,

    /// The winning count must be strictly greater than `min_share * total`
    pub min_share: f64,

    /// Downscale decoded images so the longest side is at most this many
    /// pixels. `None` tallies every pixel.
    pub max_side: Option<u32>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            near_white_threshold: NEAR_WHITE_THRESHOLD,
            min_share: DEFAULT_MIN_SHARE,
            max_side: None,
        }
    }
}

impl ExtractorConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.min_share) {
            return Err(ExtractError::invalid_parameter("min_share", self.min_share));
        }
        if self.max_side == Some(0) {
            return Err(ExtractError::invalid_parameter("max_side", 0));
        }
        Ok(())
    }

    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: &std::path::Path) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
