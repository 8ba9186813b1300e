mod mandala;
mod options;
mod style_guide;

pub use mandala::{MandalaRequest, MandalaStyle};
pub use options::{IMAGE_SIZE, ImageOptions, ImageQuality, ImageStyle};
pub use style_guide::{SERIES_LENGTH, SlidePosition, StyleGuide, StyleSource};
