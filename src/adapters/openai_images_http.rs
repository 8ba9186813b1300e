//! Image-generation client implementation using reqwest.

use std::time::Instant;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::adapters::openai_chat_http::build_http_client;
use crate::domain::imagery::IMAGE_SIZE;
use crate::domain::{ApiConfig, AppError};
use crate::ports::{GeneratedImage, ImageGenerator, ImageRequest};

const IMAGE_GENERATIONS_PATH: &str = "images/generations";

/// HTTP transport for the image-generation endpoint.
#[derive(Clone)]
pub struct HttpImageClient {
    api_key: String,
    endpoint: Url,
    model: String,
    client: Client,
}

impl std::fmt::Debug for HttpImageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpImageClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpImageClient {
    pub fn new(api_key: String, config: &ApiConfig) -> Result<Self, AppError> {
        Ok(Self {
            api_key,
            endpoint: config.endpoint(IMAGE_GENERATIONS_PATH)?,
            model: config.image_model.clone(),
            client: build_http_client(config)?,
        })
    }
}

impl ImageGenerator for HttpImageClient {
    fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, AppError> {
        let body = ApiRequest {
            model: &self.model,
            prompt: &request.prompt,
            n: 1,
            size: IMAGE_SIZE,
            quality: request.quality.as_str(),
        };

        let started = Instant::now();
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body_text = response
            .text()
            .map_err(|e| AppError::Transport(format!("Failed to read response body: {}", e)))?;

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            status = status.as_u16(),
            model = %self.model,
            quality = body.quality,
            prompt_bytes = request.prompt.len(),
            "image generation finished"
        );

        if !status.is_success() {
            return Err(AppError::Service { status: status.as_u16(), body: body_text });
        }

        let api_response: ApiResponse = serde_json::from_str(&body_text)
            .map_err(|e| AppError::MalformedResponse(format!("Failed to parse response: {}", e)))?;

        api_response
            .data
            .into_iter()
            .next()
            .and_then(|item| item.url)
            .map(|url| GeneratedImage { url })
            .ok_or_else(|| AppError::MalformedResponse("No image URL in response".into()))
    }

    fn download(&self, image: &GeneratedImage) -> Result<Vec<u8>, AppError> {
        let response = self
            .client
            .get(&image.url)
            .send()
            .map_err(|e| AppError::Transport(format!("Image download failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AppError::Service { status: status.as_u16(), body });
        }

        let bytes = response
            .bytes()
            .map_err(|e| AppError::Transport(format!("Failed to read image bytes: {}", e)))?;
        tracing::debug!(bytes = bytes.len(), "image downloaded");
        Ok(bytes.to_vec())
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'static str,
    quality: &'static str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    data: Vec<ApiImage>,
}

#[derive(Debug, Deserialize)]
struct ApiImage {
    #[serde(default)]
    url: Option<String>,
}
