//! Image generation port definition.

use crate::domain::AppError;
use crate::domain::imagery::ImageQuality;

/// Request for a single generated image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub prompt: String,
    pub quality: ImageQuality,
}

/// Reference to an image produced by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub url: String,
}

/// Port for remote image generation.
pub trait ImageGenerator {
    /// Generate one image and return where it can be fetched.
    fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, AppError>;

    /// Fetch the bytes of a previously generated image.
    fn download(&self, image: &GeneratedImage) -> Result<Vec<u8>, AppError>;
}
