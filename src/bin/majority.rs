use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use majority_color_wasm::preview::{PREVIEW_ALPHA, SwatchPreview, render_swatch_png};
use majority_color_wasm::{ExtractorConfig, MajorityColor, majority_color_bytes};
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Find the dominant non-white color of images.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// One or more input image paths
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip composited colors whose channels all exceed this value
    #[arg(short, long)]
    threshold: Option<u8>,

    /// Share of eligible pixels the majority color must exceed
    #[arg(short, long)]
    min_share: Option<f64>,

    /// Downscale so the longest side is at most this many pixels
    #[arg(long)]
    max_side: Option<u32>,

    /// Print one JSON object per input
    #[arg(long)]
    json: bool,

    /// Write `<stem>.png` and `<stem>_10.png` swatches into this directory
    #[arg(short = 'd', long)]
    swatch_dir: Option<PathBuf>,

    /// Swatch edge length in pixels
    #[arg(long, default_value_t = 100)]
    swatch_size: u32,

    /// Log extraction details
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn extractor_config(&self) -> Result<ExtractorConfig> {
        let mut config = match &self.config {
            Some(path) => ExtractorConfig::from_json_file(path)
                .map_err(|e| anyhow::anyhow!("{e}"))
                .with_context(|| format!("loading config {}", path.display()))?,
            None => ExtractorConfig::default(),
        };
        if let Some(threshold) = self.threshold {
            config.near_white_threshold = threshold;
        }
        if let Some(share) = self.min_share {
            config.min_share = share;
        }
        if self.max_side.is_some() {
            config.max_side = self.max_side;
        }
        config.validate()?;
        Ok(config)
    }
}

fn write_swatches(dir: &Path, input: &Path, majority: &MajorityColor, size: u32) -> Result<()> {
    fs::create_dir_all(dir)?;
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();

    let solid = dir.join(format!("{stem}.png"));
    fs::write(&solid, render_swatch_png(majority.color, 1.0, size)?)?;
    let tinted = dir.join(format!("{stem}_10.png"));
    fs::write(&tinted, render_swatch_png(majority.color, PREVIEW_ALPHA, size)?)?;

    tracing::info!("Saved → {} and {}", solid.display(), tinted.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();

    let config = args.extractor_config()?;
    tracing::debug!(?config, "extractor config");

    for input in &args.inputs {
        let bytes = fs::read(input).with_context(|| format!("reading {}", input.display()))?;

        let majority = match majority_color_bytes(&bytes, &config) {
            Ok(m) => Some(m),
            Err(e) if e.is_no_color() => None,
            Err(e) => return Err(e).with_context(|| format!("processing {}", input.display())),
        };

        match (&majority, args.json) {
            (Some(m), true) => {
                let preview = SwatchPreview::new(m)?;
                let line = json!({
                    "input": input.display().to_string(),
                    "hex": preview.original,
                    "rgba": preview.tinted,
                    "count": m.count,
                    "total": m.total,
                });
                println!("{line}");
            }
            (None, true) => {
                let line = json!({ "input": input.display().to_string(), "hex": null });
                println!("{line}");
            }
            (Some(m), false) => println!(
                "{}: {} ({}/{}, {:.1}%)",
                input.display(),
                m.hex(),
                m.count,
                m.total,
                m.share() * 100.0
            ),
            (None, false) => println!("{}: no significant color", input.display()),
        }

        if let (Some(dir), Some(m)) = (&args.swatch_dir, &majority) {
            write_swatches(dir, input, m, args.swatch_size)?;
        }
    }

    Ok(())
}
