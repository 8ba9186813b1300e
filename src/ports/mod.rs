mod image_generator;
mod text_generator;

pub use image_generator::{GeneratedImage, ImageGenerator, ImageRequest};
pub use text_generator::{CompletionRequest, TextGenerator};
