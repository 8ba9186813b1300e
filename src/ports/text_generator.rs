//! Text generation port definition.

use crate::domain::AppError;

/// A single chat-completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Role/system instruction.
    pub system: String,
    /// User instruction.
    pub user: String,
    /// Sampling temperature in `[0, 1]`.
    pub temperature: f64,
    /// Ask the service to answer with a single JSON object.
    pub json_mode: bool,
    /// Model override; the adapter's default model is used when `None`.
    pub model: Option<String>,
    /// Completion token cap.
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, user: impl Into<String>, temperature: f64) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            temperature,
            json_mode: false,
            model: None,
            max_tokens: None,
        }
    }

    pub fn json_mode(mut self) -> Self {
        self.json_mode = true;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Port for remote text generation.
///
/// One call issues exactly one logical request and returns the generated
/// text verbatim.
pub trait TextGenerator {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        (**self).complete(request)
    }
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        (**self).complete(request)
    }
}

impl<T: TextGenerator + ?Sized> TextGenerator for std::sync::Arc<T> {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        (**self).complete(request)
    }
}
