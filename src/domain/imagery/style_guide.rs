//! Visual style shared across the slides of an image series.

use crate::domain::AppError;
use crate::domain::imagery::ImageStyle;

pub const SERIES_LENGTH: usize = 3;

/// Where a style descriptor came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleSource {
    Service,
    Fallback,
}

/// Style descriptor produced once per series and passed into every slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleGuide {
    descriptor: String,
    source: StyleSource,
}

impl StyleGuide {
    pub fn from_service(descriptor: impl Into<String>) -> Self {
        Self { descriptor: descriptor.into(), source: StyleSource::Service }
    }

    pub fn fallback(style: ImageStyle) -> Self {
        Self {
            descriptor: format!(
                "High-impact {} style with consistent color palette and mood throughout all images. Maintain identical artistic approach across all visuals.",
                style.name()
            ),
            source: StyleSource::Fallback,
        }
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    pub fn source(&self) -> StyleSource {
        self.source
    }
}

/// 1-based slide position within a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidePosition(usize);

impl SlidePosition {
    pub fn new(position: usize) -> Result<Self, AppError> {
        if !(1..=SERIES_LENGTH).contains(&position) {
            return Err(AppError::Validation(format!(
                "Slide position {} is outside 1..={}",
                position, SERIES_LENGTH
            )));
        }
        Ok(Self(position))
    }

    pub fn all() -> impl Iterator<Item = SlidePosition> {
        (1..=SERIES_LENGTH).map(SlidePosition)
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn template_name(&self) -> &'static str {
        match self.0 {
            1 => "series/slide_introduce.txt",
            2 => "series/slide_develop.txt",
            _ => "series/slide_resolve.txt",
        }
    }
}
