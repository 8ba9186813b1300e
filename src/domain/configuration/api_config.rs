//! Remote API configuration models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `penh.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Remote API configuration.
    #[serde(default)]
    pub api: ApiConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()
    }
}

/// OpenAI-compatible API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL that endpoint paths are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Model used by the prompt workflow.
    #[serde(default = "default_chat_model")]
    pub chat_model: String,
    /// Model used for posts and style guides.
    #[serde(default = "default_content_model")]
    pub content_model: String,
    /// Model used for image generation.
    #[serde(default = "default_image_model")]
    pub image_model: String,
    /// Request timeout in seconds; the HTTP client's own default when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Maximum attempts per remote call (1 disables retry).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base delay between retries in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            chat_model: default_chat_model(),
            content_model: default_content_model(),
            image_model: default_image_model(),
            timeout_secs: None,
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == Some(0) {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if self.max_retries == 0 {
            return Err(AppError::config_error("max_retries must be greater than 0"));
        }
        if self.retry_delay_ms == 0 {
            return Err(AppError::config_error("retry_delay_ms must be greater than 0"));
        }
        for (field, value) in [
            ("chat_model", &self.chat_model),
            ("content_model", &self.content_model),
            ("image_model", &self.image_model),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::config_error(format!("{} must not be empty", field)));
            }
        }
        Ok(())
    }

    /// Resolve an endpoint path (e.g. `chat/completions`) against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path).map_err(|e| {
            AppError::config_error(format!("Invalid endpoint '{}' for {}: {}", path, base, e))
        })
    }
}

fn default_base_url() -> Url {
    Url::parse("https://api.openai.com/v1/").expect("Default API URL must be valid")
}

fn default_chat_model() -> String {
    "gpt-4-turbo".to_string()
}

fn default_content_model() -> String {
    "gpt-4o".to_string()
}

fn default_image_model() -> String {
    "dall-e-3".to_string()
}

fn default_max_retries() -> u32 {
    1
}

fn default_retry_delay_ms() -> u64 {
    1000
}
