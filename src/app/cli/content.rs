//! Content command implementation.

use std::path::PathBuf;

use clap::Args;

use super::{load_context, value_or_prompt};
use crate::app::api;
use crate::domain::AppError;
use crate::domain::content::Platform;

const DEFAULT_PERSONA: &str = "Ogilvy-style storyteller";
const DEFAULT_TONE: &str = "Professional";

#[derive(Args)]
pub struct ContentArgs {
    /// What the posts are about
    #[arg(short, long)]
    topic: Option<String>,
    /// Built-in persona name, or a free-form description
    #[arg(long, default_value = DEFAULT_PERSONA)]
    persona: String,
    /// Sarcastic, Professional, or Casual
    #[arg(long, default_value = DEFAULT_TONE)]
    tone: String,
    /// linkedin, twitter, or whatsapp (repeatable; all when omitted)
    #[arg(short, long = "platform")]
    platforms: Vec<String>,
}

pub fn run_content(config: Option<PathBuf>, args: ContentArgs) -> Result<(), AppError> {
    let platforms = if args.platforms.is_empty() {
        Platform::ALL.to_vec()
    } else {
        args.platforms.iter().map(|name| Platform::from_name(name)).collect::<Result<_, _>>()?
    };
    let ctx = load_context(config)?;
    let topic = value_or_prompt(args.topic, "Topic")?;

    let posts = api::generate_posts(&ctx, &topic, &args.persona, &args.tone, &platforms)?;
    for (index, (platform, post)) in posts.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("=== {} ===", platform.display_name());
        println!("{}", post);
    }
    Ok(())
}
