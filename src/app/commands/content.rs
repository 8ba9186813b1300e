//! Platform post generation in a chosen persona and tone.

use serde::Serialize;

use crate::adapters::catalogs::builtin_voice_catalog;
use crate::adapters::{render_prompt, render_static};
use crate::domain::AppError;
use crate::domain::content::{Persona, Platform, Tone, sanitize_text};
use crate::ports::{CompletionRequest, TextGenerator};

const CONTENT_SYSTEM: &str = "content/system.txt";
const CONTENT_TEMPERATURE: f64 = 1.0;

/// A request for one post on one platform.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRequest {
    pub topic: String,
    pub persona: String,
    pub tone: String,
    pub platform: Platform,
    /// Model override; the client's default is used when `None`.
    pub model: Option<String>,
}

impl PostRequest {
    pub fn new(
        topic: impl Into<String>,
        persona: impl Into<String>,
        tone: impl Into<String>,
        platform: Platform,
    ) -> Self {
        Self {
            topic: topic.into(),
            persona: persona.into(),
            tone: tone.into(),
            platform,
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

#[derive(Serialize)]
struct PostContext<'a> {
    topic: &'a str,
    persona_name: &'a str,
    tone_name: &'a str,
    persona: &'a Persona,
    tone: &'a Tone,
}

/// Generate a post for `request.platform`, returning sanitized text.
pub fn generate_post<G: TextGenerator + ?Sized>(
    generator: &G,
    request: &PostRequest,
) -> Result<String, AppError> {
    let topic = sanitize_text(&request.topic).trim().to_string();
    if topic.is_empty() {
        return Err(AppError::MissingField("topic"));
    }
    let persona_name = sanitize_text(&request.persona).trim().to_string();
    let tone_name = sanitize_text(&request.tone).trim().to_string();

    let catalog = builtin_voice_catalog()?;
    let persona = catalog.persona(&persona_name);
    let tone = catalog.tone(&tone_name);

    let user = render_prompt(
        request.platform.template_name(),
        PostContext {
            topic: &topic,
            persona_name: &persona.name,
            tone_name: &tone.name,
            persona: &persona,
            tone: &tone,
        },
    )?;

    let mut completion =
        CompletionRequest::new(render_static(CONTENT_SYSTEM)?, user, CONTENT_TEMPERATURE)
            .with_max_tokens(request.platform.max_tokens());
    if let Some(model) = &request.model {
        completion = completion.with_model(model.clone());
    }

    let text = generator.complete(&completion)?;
    tracing::info!(
        platform = request.platform.name(),
        persona = %persona.name,
        tone = %tone.name,
        bytes = text.len(),
        "post generated"
    );
    Ok(sanitize_text(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedTextGenerator;

    #[test]
    fn uses_platform_token_limit_and_content_temperature() {
        let generator = ScriptedTextGenerator::new(vec![Ok("Short take.".into())]);
        let request = PostRequest::new("remote work", "Tech Visionary", "Casual", Platform::Twitter)
            .with_model("gpt-4o");

        let post = generate_post(&generator, &request).unwrap();

        assert_eq!(post, "Short take.");
        let sent = &generator.requests()[0];
        assert_eq!(sent.max_tokens, Some(200));
        assert_eq!(sent.temperature, 1.0);
        assert_eq!(sent.model.as_deref(), Some("gpt-4o"));
        assert!(!sent.json_mode);
        assert!(sent.system.starts_with("You are an expert writer"));
        assert!(sent.user.starts_with("Create a Twitter post about \"remote work\""));
        assert!(sent.user.contains("forward-thinking innovator"));
    }

    #[test]
    fn sanitizes_inputs_and_response() {
        let generator =
            ScriptedTextGenerator::new(vec![Ok("It\u{2019}s here \u{2014} finally\u{2026}".into())]);
        let request = PostRequest::new(
            "\u{201C}Green\u{201D} roofs",
            "Savage Satirist",
            "Sarcastic",
            Platform::LinkedIn,
        );

        let post = generate_post(&generator, &request).unwrap();

        assert_eq!(post, "It's here -- finally...");
        let sent = &generator.requests()[0];
        assert!(sent.user.contains("about \"\"Green\" roofs\""));
        assert_eq!(sent.max_tokens, Some(350));
    }

    #[test]
    fn unknown_persona_and_tone_fall_back() {
        let generator = ScriptedTextGenerator::new(vec![Ok("ok".into())]);
        let request =
            PostRequest::new("sourdough", "retired sea captain", "whimsical", Platform::WhatsApp);

        generate_post(&generator, &request).unwrap();

        let sent = &generator.requests()[0];
        assert!(sent.user.contains("retired sea captain with a Professional tone"));
        assert_eq!(sent.max_tokens, Some(300));
    }

    #[test]
    fn empty_topic_is_rejected_without_a_call() {
        let generator = ScriptedTextGenerator::new(vec![]);
        let request =
            PostRequest::new(" \u{00A0}\u{00A0} ", "Tech Visionary", "Casual", Platform::Twitter);

        let err = generate_post(&generator, &request).unwrap_err();

        assert!(matches!(err, AppError::MissingField("topic")));
        assert_eq!(generator.call_count(), 0);
    }
}
