//! Chat-completion client implementation using reqwest.

use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{ApiConfig, AppError};
use crate::ports::{CompletionRequest, TextGenerator};

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
const CHAT_COMPLETIONS_PATH: &str = "chat/completions";

/// HTTP transport for the chat-completion endpoint.
///
/// This client performs a single request per call. Retry behavior is implemented
/// by a dedicated retry wrapper adapter.
#[derive(Clone)]
pub struct HttpChatClient {
    api_key: String,
    endpoint: Url,
    default_model: String,
    client: Client,
}

impl std::fmt::Debug for HttpChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpChatClient")
            .field("endpoint", &self.endpoint)
            .field("default_model", &self.default_model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpChatClient {
    /// Create a new HTTP client with the given bearer credential and configuration.
    pub fn new(api_key: String, config: &ApiConfig) -> Result<Self, AppError> {
        let client = build_http_client(config)?;

        Ok(Self {
            api_key,
            endpoint: config.endpoint(CHAT_COMPLETIONS_PATH)?,
            default_model: config.chat_model.clone(),
            client,
        })
    }

    fn send_request(&self, request: &ApiRequest<'_>) -> Result<String, AppError> {
        let started = Instant::now();
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body_text = response
            .text()
            .map_err(|e| AppError::Transport(format!("Failed to read response body: {}", e)))?;

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            status = status.as_u16(),
            model = request.model,
            json_mode = request.response_format.is_some(),
            response_bytes = body_text.len(),
            "chat completion finished"
        );

        if !status.is_success() {
            return Err(AppError::Service { status: status.as_u16(), body: body_text });
        }

        let api_response: ApiResponse = serde_json::from_str(&body_text)
            .map_err(|e| AppError::MalformedResponse(format!("Failed to parse response: {}", e)))?;

        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::MalformedResponse("No message content in response".into()))
    }
}

impl TextGenerator for HttpChatClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        let api_request = ApiRequest {
            model: request.model.as_deref().unwrap_or(&self.default_model),
            messages: vec![
                ApiMessage { role: "system", content: &request.system },
                ApiMessage { role: "user", content: &request.user },
            ],
            temperature: request.temperature,
            response_format: request.json_mode.then_some(ResponseFormat { kind: "json_object" }),
            max_tokens: request.max_tokens,
        };

        tracing::debug!(
            system_bytes = request.system.len(),
            user_bytes = request.user.len(),
            "sending chat completion"
        );
        self.send_request(&api_request)
    }
}

/// Read the bearer credential from the environment.
pub fn api_key_from_env() -> Result<String, AppError> {
    std::env::var(API_KEY_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::EnvironmentVariableMissing(API_KEY_ENV.into()))
}

pub(crate) fn build_http_client(config: &ApiConfig) -> Result<Client, AppError> {
    let mut builder = Client::builder();
    if let Some(timeout) = request_timeout(config) {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| AppError::Transport(format!("Failed to create HTTP client: {}", e)))
}

/// Timeout override for remote calls; `None` keeps the transport default.
fn request_timeout(config: &ApiConfig) -> Option<Duration> {
    config.timeout_secs.map(Duration::from_secs)
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ApiChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn config_for(server: &mockito::Server) -> ApiConfig {
        ApiConfig {
            base_url: Url::parse(&server.url()).unwrap(),
            timeout_secs: Some(5),
            ..ApiConfig::default()
        }
    }

    fn completion_body(content: &str) -> String {
        json!({"choices": [{"message": {"role": "assistant", "content": content}}]}).to_string()
    }

    #[test]
    fn complete_returns_first_message_verbatim() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-4-turbo",
                "messages": [
                    {"role": "system", "content": "be helpful"},
                    {"role": "user", "content": "say hi"}
                ],
                "temperature": 0.7
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body("  Hi there!\n"))
            .expect(1)
            .create();

        let client = HttpChatClient::new("sk-test".into(), &config_for(&server)).unwrap();
        let text = client.complete(&CompletionRequest::new("be helpful", "say hi", 0.7)).unwrap();

        assert_eq!(text, "  Hi there!\n");
        mock.assert();
    }

    #[test]
    fn json_mode_sets_response_format() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/chat/completions")
            .match_body(Matcher::PartialJson(json!({
                "response_format": {"type": "json_object"}
            })))
            .with_status(200)
            .with_body(completion_body(r#"{"questions":[]}"#))
            .expect(1)
            .create();

        let client = HttpChatClient::new("sk-test".into(), &config_for(&server)).unwrap();
        let request = CompletionRequest::new("sys", "user", 0.7).json_mode();

        assert_eq!(client.complete(&request).unwrap(), r#"{"questions":[]}"#);
        mock.assert();
    }

    #[test]
    fn plain_requests_omit_optional_fields() {
        let request = ApiRequest {
            model: "gpt-4-turbo",
            messages: vec![ApiMessage { role: "user", content: "hi" }],
            temperature: 0.7,
            response_format: None,
            max_tokens: None,
        };
        let value = serde_json::to_value(&request).unwrap();

        assert!(value.get("response_format").is_none());
        assert!(value.get("max_tokens").is_none());
        assert_eq!(value["messages"][0]["role"], "user");
    }

    #[test]
    fn model_override_and_token_cap_are_sent() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/chat/completions")
            .match_body(Matcher::PartialJson(json!({"model": "gpt-4o", "max_tokens": 200})))
            .with_status(200)
            .with_body(completion_body("post"))
            .expect(1)
            .create();

        let client = HttpChatClient::new("sk-test".into(), &config_for(&server)).unwrap();
        let request =
            CompletionRequest::new("sys", "user", 1.0).with_model("gpt-4o").with_max_tokens(200);

        assert_eq!(client.complete(&request).unwrap(), "post");
        mock.assert();
    }

    #[test]
    fn non_success_status_maps_to_service_error_with_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body(r#"{"error":{"message":"Incorrect API key provided"}}"#)
            .expect(1)
            .create();

        let client = HttpChatClient::new("sk-bad".into(), &config_for(&server)).unwrap();
        let err = client.complete(&CompletionRequest::new("sys", "user", 0.7)).unwrap_err();

        match err {
            AppError::Service { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, r#"{"error":{"message":"Incorrect API key provided"}}"#);
            }
            other => panic!("unexpected error variant: {}", other),
        }
        mock.assert();
    }

    #[test]
    fn missing_content_is_malformed() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create();

        let client = HttpChatClient::new("sk-test".into(), &config_for(&server)).unwrap();
        let err = client.complete(&CompletionRequest::new("sys", "user", 0.7)).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn non_json_success_body_is_malformed() {
        let mut server = mockito::Server::new();
        let _mock =
            server.mock("POST", "/chat/completions").with_status(200).with_body("<html>").create();

        let client = HttpChatClient::new("sk-test".into(), &config_for(&server)).unwrap();
        let err = client.complete(&CompletionRequest::new("sys", "user", 0.7)).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn unreachable_host_is_transport_error() {
        let config = ApiConfig {
            base_url: Url::parse("http://127.0.0.1:1/").unwrap(),
            timeout_secs: Some(2),
            ..ApiConfig::default()
        };
        let client = HttpChatClient::new("sk-test".into(), &config).unwrap();
        let err = client.complete(&CompletionRequest::new("sys", "user", 0.7)).unwrap_err();
        assert!(matches!(err, AppError::Transport(_)));
    }

    #[test]
    fn timeout_is_only_overridden_when_configured() {
        assert_eq!(request_timeout(&ApiConfig::default()), None);

        let config = ApiConfig { timeout_secs: Some(12), ..ApiConfig::default() };
        assert_eq!(request_timeout(&config), Some(Duration::from_secs(12)));
        assert!(build_http_client(&ApiConfig::default()).is_ok());
    }

    #[test]
    fn debug_output_redacts_credential() {
        let client = HttpChatClient::new("sk-very-secret".into(), &ApiConfig::default()).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
