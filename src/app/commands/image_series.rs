//! Three-slide carousel images sharing one visual style guide.

use crate::adapters::{render_prompt, render_static};
use crate::domain::AppError;
use crate::domain::content::sanitize_text;
use crate::domain::imagery::{ImageOptions, SlidePosition, StyleGuide};
use crate::ports::{CompletionRequest, GeneratedImage, ImageGenerator, ImageRequest, TextGenerator};

const STYLE_SYSTEM: &str = "series/style_guide_system.txt";
const STYLE_USER: &str = "series/style_guide_user.txt";
const SINGLE_IMAGE: &str = "series/single_image.txt";
const STYLE_TEMPERATURE: f64 = 0.7;
const STYLE_MAX_TOKENS: u32 = 300;

/// Ask the service for a style guide, falling back to a generic one.
///
/// Never fails: any error is logged and replaced by [`StyleGuide::fallback`].
pub fn establish_style<G: TextGenerator + ?Sized>(
    generator: &G,
    topic: &str,
    options: &ImageOptions,
    model: Option<&str>,
) -> StyleGuide {
    match request_style(generator, topic, options, model) {
        Ok(descriptor) => StyleGuide::from_service(descriptor),
        Err(error) => {
            tracing::warn!(
                error = %error,
                style = options.style.name(),
                "style guide unavailable, using fallback"
            );
            StyleGuide::fallback(options.style)
        }
    }
}

fn request_style<G: TextGenerator + ?Sized>(
    generator: &G,
    topic: &str,
    options: &ImageOptions,
    model: Option<&str>,
) -> Result<String, AppError> {
    let user = render_prompt(
        STYLE_USER,
        minijinja::context! { topic => sanitize_text(topic), style => options.style.name() },
    )?;
    let mut request = CompletionRequest::new(render_static(STYLE_SYSTEM)?, user, STYLE_TEMPERATURE)
        .with_max_tokens(STYLE_MAX_TOKENS);
    if let Some(model) = model {
        request = request.with_model(model);
    }

    let descriptor = generator.complete(&request)?;
    let descriptor = descriptor.trim();
    if descriptor.is_empty() {
        return Err(AppError::MalformedResponse("Style guide response was empty".into()));
    }
    Ok(descriptor.to_string())
}

/// Image prompt for one slide; every slide embeds the same `guide`.
pub fn slide_prompt(
    topic: &str,
    position: SlidePosition,
    guide: &StyleGuide,
) -> Result<String, AppError> {
    let prompt = render_prompt(
        position.template_name(),
        minijinja::context! { topic => topic, style_guide => guide.descriptor() },
    )?;
    Ok(sanitize_text(&prompt))
}

/// Prompt for a single shareable image.
pub fn single_image_prompt(topic: &str, options: &ImageOptions) -> Result<String, AppError> {
    let prompt = render_prompt(
        SINGLE_IMAGE,
        minijinja::context! { topic => topic, style => options.style.name() },
    )?;
    Ok(sanitize_text(&prompt))
}

/// Generated carousel, in slide order.
#[derive(Debug, Clone)]
pub struct ImageSeries {
    pub style_guide: StyleGuide,
    pub slides: Vec<GeneratedImage>,
}

/// Establish a style guide once and generate every slide from it.
pub fn generate_series<G, I>(
    text: &G,
    images: &I,
    topic: &str,
    options: &ImageOptions,
    style_model: Option<&str>,
) -> Result<ImageSeries, AppError>
where
    G: TextGenerator + ?Sized,
    I: ImageGenerator + ?Sized,
{
    let topic = sanitize_text(topic).trim().to_string();
    if topic.is_empty() {
        return Err(AppError::MissingField("topic"));
    }

    let style_guide = establish_style(text, &topic, options, style_model);
    let mut slides = Vec::new();
    for position in SlidePosition::all() {
        let prompt = slide_prompt(&topic, position, &style_guide)?;
        let image = images.generate(&ImageRequest { prompt, quality: options.quality })?;
        tracing::info!(slide = position.get(), url = %image.url, "slide generated");
        slides.push(image);
    }

    Ok(ImageSeries { style_guide, slides })
}
