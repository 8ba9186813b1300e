use std::sync::Arc;

use crate::domain::AppConfig;
use crate::ports::{ImageGenerator, TextGenerator};

/// Application context holding the configuration and remote ports.
pub struct AppContext<T: TextGenerator, I: ImageGenerator> {
    config: AppConfig,
    text: Arc<T>,
    images: I,
}

impl<T: TextGenerator, I: ImageGenerator> AppContext<T, I> {
    pub fn new(config: AppConfig, text: T, images: I) -> Self {
        Self { config, text: Arc::new(text), images }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the text generator.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Shared handle for work that runs on a background thread.
    pub fn shared_text(&self) -> Arc<T> {
        Arc::clone(&self.text)
    }

    /// Get a reference to the image generator.
    pub fn images(&self) -> &I {
        &self.images
    }
}
