//! Single-word mandala images.

use crate::adapters::render_prompt;
use crate::domain::AppError;
use crate::domain::imagery::{ImageQuality, MandalaRequest};
use crate::ports::{GeneratedImage, ImageGenerator, ImageRequest};

/// A generated mandala with its downloaded PNG bytes.
#[derive(Debug, Clone)]
pub struct MandalaImage {
    pub prompt: String,
    pub image: GeneratedImage,
    pub bytes: Vec<u8>,
}

pub fn mandala_prompt(request: &MandalaRequest) -> Result<String, AppError> {
    render_prompt(request.style().template_name(), minijinja::context! { word => request.word() })
}

/// Generate the mandala for `request` and download it.
pub fn generate_mandala<I: ImageGenerator + ?Sized>(
    images: &I,
    request: &MandalaRequest,
    quality: ImageQuality,
) -> Result<MandalaImage, AppError> {
    let prompt = mandala_prompt(request)?;
    let image = images.generate(&ImageRequest { prompt: prompt.clone(), quality })?;
    let bytes = images.download(&image)?;
    tracing::info!(
        word = request.word(),
        style = request.style().name(),
        bytes = bytes.len(),
        "mandala generated"
    );
    Ok(MandalaImage { prompt, image, bytes })
}
