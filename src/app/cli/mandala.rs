//! Mandala command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use super::load_context;
use crate::app::api;
use crate::domain::AppError;
use crate::domain::imagery::{ImageQuality, MandalaRequest, MandalaStyle};

#[derive(Args)]
pub struct MandalaArgs {
    /// Single word placed at the center of the mandala
    word: String,
    /// bw, color, or new-age
    #[arg(long, default_value = "bw")]
    style: String,
    /// standard or hd
    #[arg(long, default_value = "standard")]
    quality: String,
    /// Output file (defaults to mandala_<word>.png)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run_mandala(config: Option<PathBuf>, args: MandalaArgs) -> Result<(), AppError> {
    let style = MandalaStyle::from_name(&args.style)?;
    let quality = ImageQuality::from_name(&args.quality)?;
    // Reject bad input before the credential is needed.
    MandalaRequest::new(&args.word, style)?;

    let ctx = load_context(config)?;
    let (request, mandala) = api::generate_mandala(&ctx, &args.word, style, quality)?;

    let path = args.output.unwrap_or_else(|| PathBuf::from(request.file_name()));
    fs::write(&path, &mandala.bytes)?;
    println!("✅ Saved {} mandala to {}", request.style().name(), path.display());
    Ok(())
}
