//! CLI Adapter.

mod content;
mod enhance;
mod mandala;
mod series;

use std::io::ErrorKind;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::{Error as DialoguerError, Input};

use crate::app::api::{self, HttpContext};
use crate::app::logging::init_logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "penh")]
#[command(version)]
#[command(
    about = "Refine prompt components into finished prompts and generate platform content",
    long_about = None
)]
struct Cli {
    /// Configuration file (defaults to ./penh.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log remote calls and progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn prompt components into an enhanced prompt
    #[clap(visible_alias = "e")]
    Enhance(enhance::EnhanceArgs),
    /// Write platform posts in a persona and tone
    #[clap(visible_alias = "c")]
    Content(content::ContentArgs),
    /// Generate a three-slide image series with one visual style
    #[clap(visible_alias = "s")]
    Series(series::SeriesArgs),
    /// Generate a mandala image centered on a single word
    #[clap(visible_alias = "m")]
    Mandala(mandala::MandalaArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Enhance(args) => enhance::run_enhance(cli.config, args),
        Commands::Content(args) => content::run_content(cli.config, args),
        Commands::Series(args) => series::run_series(cli.config, args),
        Commands::Mandala(args) => mandala::run_mandala(cli.config, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_context(config: Option<PathBuf>) -> Result<HttpContext, AppError> {
    let config = api::load_config(config.as_deref())?;
    api::create_context(config)
}

/// Use `value` when given, otherwise ask for it on the terminal.
fn value_or_prompt(value: Option<String>, prompt: &str) -> Result<String, AppError> {
    match value {
        Some(value) => Ok(value),
        None => prompt_text(prompt, false),
    }
}

fn prompt_text(prompt: &str, allow_empty: bool) -> Result<String, AppError> {
    match Input::<String>::new().with_prompt(prompt).allow_empty(allow_empty).interact_text() {
        Ok(value) => Ok(value),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
            Err(AppError::Validation("Cancelled".to_string()))
        }
        Err(err) => Err(AppError::Validation(format!("Failed to read {}: {}", prompt, err))),
    }
}
