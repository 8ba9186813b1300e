use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{GeneratedImage, ImageGenerator, ImageRequest};

/// Image generator double that hands out numbered URLs.
#[derive(Default)]
pub struct ScriptedImageGenerator {
    pub requests: Mutex<Vec<ImageRequest>>,
    pub fail_with_status: Option<u16>,
}

impl ScriptedImageGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(status: u16) -> Self {
        Self { fail_with_status: Some(status), ..Self::default() }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.requests.lock().unwrap().iter().map(|request| request.prompt.clone()).collect()
    }
}

impl ImageGenerator for ScriptedImageGenerator {
    fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, AppError> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(request.clone());
        if let Some(status) = self.fail_with_status {
            return Err(AppError::Service { status, body: "test: image rejected".into() });
        }
        Ok(GeneratedImage { url: format!("https://images.test/{}.png", requests.len()) })
    }

    fn download(&self, image: &GeneratedImage) -> Result<Vec<u8>, AppError> {
        Ok(image.url.as_bytes().to_vec())
    }
}
