use url::Url;

use crate::domain::AppError;

const CHAT_URL: &str = "https://chat.openai.com/";

/// Link that opens a chat session prefilled with `prompt`.
pub fn share_link(prompt: &str) -> Result<Url, AppError> {
    Url::parse_with_params(CHAT_URL, &[("prompt", prompt)])
        .map_err(|err| AppError::Validation(format!("Failed to build share link: {}", err)))
}
