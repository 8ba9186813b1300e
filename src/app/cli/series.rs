//! Series command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use super::{load_context, value_or_prompt};
use crate::app::api;
use crate::domain::AppError;
use crate::domain::imagery::{ImageOptions, ImageQuality, ImageStyle, StyleSource};
use crate::ports::ImageGenerator;

const SINGLE_IMAGE_FILE: &str = "whatsapp_image.png";

#[derive(Args)]
pub struct SeriesArgs {
    /// What the series is about
    #[arg(short, long)]
    topic: Option<String>,
    /// photorealistic, artistic, minimalist, or infographic
    #[arg(long, default_value = "photorealistic")]
    style: String,
    /// standard or hd
    #[arg(long, default_value = "standard")]
    quality: String,
    /// Directory for the downloaded slides
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Generate one shareable image instead of a three-slide series
    #[arg(long)]
    single: bool,
}

pub fn run_series(config: Option<PathBuf>, args: SeriesArgs) -> Result<(), AppError> {
    let options = ImageOptions {
        style: ImageStyle::from_name(&args.style)?,
        quality: ImageQuality::from_name(&args.quality)?,
    };
    let ctx = load_context(config)?;
    let topic = value_or_prompt(args.topic, "Topic")?;

    if args.single {
        let image = api::generate_single_image(&ctx, &topic, &options)?;
        let bytes = ctx.images().download(&image)?;
        fs::create_dir_all(&args.out_dir)?;
        let path = args.out_dir.join(SINGLE_IMAGE_FILE);
        fs::write(&path, bytes)?;
        println!("✅ Image: {}", path.display());
        return Ok(());
    }

    let series = api::generate_series(&ctx, &topic, &options)?;
    if series.style_guide.source() == StyleSource::Fallback {
        eprintln!("⚠️  Style guide unavailable, used the default {} style", options.style.name());
    }
    let written = api::save_series(&ctx, &series, &args.out_dir)?;

    println!("Style guide:\n{}\n", series.style_guide.descriptor());
    for (index, path) in written.iter().enumerate() {
        println!("✅ Slide {}: {}", index + 1, path.display());
    }
    Ok(())
}
