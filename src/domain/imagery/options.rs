use crate::domain::AppError;

pub const IMAGE_SIZE: &str = "1024x1024";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageStyle {
    #[default]
    Photorealistic,
    Artistic,
    Minimalist,
    Infographic,
}

impl ImageStyle {
    pub const ALL: [ImageStyle; 4] = [
        ImageStyle::Photorealistic,
        ImageStyle::Artistic,
        ImageStyle::Minimalist,
        ImageStyle::Infographic,
    ];

    /// Lowercase name as embedded in prompts.
    pub fn name(&self) -> &'static str {
        match self {
            ImageStyle::Photorealistic => "photorealistic",
            ImageStyle::Artistic => "artistic",
            ImageStyle::Minimalist => "minimalist",
            ImageStyle::Infographic => "infographic",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, AppError> {
        let normalized = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|style| style.name() == normalized).ok_or_else(|| {
            AppError::Validation(format!(
                "Unknown image style '{}': must be one of photorealistic, artistic, minimalist, infographic",
                name
            ))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageQuality {
    #[default]
    Standard,
    Hd,
}

impl ImageQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageQuality::Standard => "standard",
            ImageQuality::Hd => "hd",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, AppError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(ImageQuality::Standard),
            "hd" => Ok(ImageQuality::Hd),
            _ => Err(AppError::Validation(format!(
                "Unknown image quality '{}': must be standard or hd",
                name
            ))),
        }
    }
}

/// Rendering choices shared by every image in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageOptions {
    pub style: ImageStyle,
    pub quality: ImageQuality,
}
