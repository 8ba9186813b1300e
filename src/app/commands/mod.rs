pub mod content;
pub mod enhance;
pub mod image_series;
pub mod mandala;
