//! API Facade for the application.
//!
//! This module glues together context creation and command execution.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::openai_chat_http::api_key_from_env;
use crate::adapters::{HttpChatClient, HttpImageClient, RetryPolicy, RetryingTextGenerator};
use crate::app::AppContext;
use crate::app::commands::{content, image_series, mandala};
use crate::domain::content::Platform;
use crate::domain::imagery::{ImageOptions, ImageQuality, MandalaRequest, MandalaStyle};
use crate::ports::{GeneratedImage, ImageGenerator, ImageRequest, TextGenerator};

pub use crate::app::commands::content::PostRequest;
pub use crate::app::commands::image_series::ImageSeries;
pub use crate::app::commands::mandala::MandalaImage;
pub use crate::domain::configuration::load_config;
pub use crate::domain::{AppConfig, AppError};

/// Context backed by the HTTP adapters.
pub type HttpContext = AppContext<RetryingTextGenerator<HttpChatClient>, HttpImageClient>;

/// Build the HTTP-backed context, reading the credential from the environment.
pub fn create_context(config: AppConfig) -> Result<HttpContext, AppError> {
    let api_key = api_key_from_env()?;
    let chat = HttpChatClient::new(api_key.clone(), &config.api)?;
    let text = RetryingTextGenerator::new(chat, RetryPolicy::from_config(&config.api));
    let images = HttpImageClient::new(api_key, &config.api)?;
    Ok(AppContext::new(config, text, images))
}

/// Generate one post per platform, in the order given.
pub fn generate_posts<T, I>(
    ctx: &AppContext<T, I>,
    topic: &str,
    persona: &str,
    tone: &str,
    platforms: &[Platform],
) -> Result<Vec<(Platform, String)>, AppError>
where
    T: TextGenerator,
    I: ImageGenerator,
{
    let model = &ctx.config().api.content_model;
    platforms
        .iter()
        .map(|&platform| {
            let request = PostRequest::new(topic, persona, tone, platform).with_model(model.clone());
            content::generate_post(ctx.text(), &request).map(|post| (platform, post))
        })
        .collect()
}

/// Generate a three-slide series whose style guide comes from the content model.
pub fn generate_series<T, I>(
    ctx: &AppContext<T, I>,
    topic: &str,
    options: &ImageOptions,
) -> Result<ImageSeries, AppError>
where
    T: TextGenerator,
    I: ImageGenerator,
{
    image_series::generate_series(
        ctx.text(),
        ctx.images(),
        topic,
        options,
        Some(ctx.config().api.content_model.as_str()),
    )
}

/// Generate one shareable image for `topic`.
pub fn generate_single_image<T, I>(
    ctx: &AppContext<T, I>,
    topic: &str,
    options: &ImageOptions,
) -> Result<GeneratedImage, AppError>
where
    T: TextGenerator,
    I: ImageGenerator,
{
    let prompt = image_series::single_image_prompt(topic, options)?;
    ctx.images().generate(&ImageRequest { prompt, quality: options.quality })
}

/// Download every slide of `series` into `out_dir` as `linkedin_slide_<n>.png`.
pub fn save_series<T, I>(
    ctx: &AppContext<T, I>,
    series: &ImageSeries,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, AppError>
where
    T: TextGenerator,
    I: ImageGenerator,
{
    fs::create_dir_all(out_dir)?;
    let mut written = Vec::with_capacity(series.slides.len());
    for (index, slide) in series.slides.iter().enumerate() {
        let bytes = ctx.images().download(slide)?;
        let path = out_dir.join(format!("linkedin_slide_{}.png", index + 1));
        fs::write(&path, bytes)?;
        written.push(path);
    }
    Ok(written)
}

/// Validate `word`, generate its mandala and download the image.
pub fn generate_mandala<T, I>(
    ctx: &AppContext<T, I>,
    word: &str,
    style: MandalaStyle,
    quality: ImageQuality,
) -> Result<(MandalaRequest, MandalaImage), AppError>
where
    T: TextGenerator,
    I: ImageGenerator,
{
    let request = MandalaRequest::new(word, style)?;
    let image = mandala::generate_mandala(ctx.images(), &request, quality)?;
    Ok((request, image))
}
