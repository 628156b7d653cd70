//! Chat-completions HTTP gateway.
//!
//! Sends a single user message to an OpenAI-compatible `/chat/completions`
//! endpoint (Mistral by default) and returns the reply text. One attempt per
//! call; failures are mapped onto [`GatewayError`] without retry.

use crate::config::FileProviderConfig;
use async_trait::async_trait;
use dslgen_application::ports::llm_gateway::{GatewayError, LlmGateway};
use dslgen_domain::core::string::truncate;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Connection settings for [`ChatCompletionsGateway`]
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletionsSettings {
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Option<Duration>,
}

impl ChatCompletionsSettings {
    /// Settings from the `[provider]` section, resolving the API key
    pub fn from_config(config: &FileProviderConfig) -> Result<Self, GatewayError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            GatewayError::Configuration(format!(
                "no API key: set {} or provider.api_key",
                config.api_key_env
            ))
        })?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            timeout: config.timeout_seconds.map(Duration::from_secs),
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
    temperature: f32,
}

/// [`LlmGateway`] over HTTPS with reqwest
pub struct ChatCompletionsGateway {
    client: reqwest::Client,
    settings: ChatCompletionsSettings,
}

impl ChatCompletionsGateway {
    pub fn new(settings: ChatCompletionsSettings) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Configuration(e.to_string()))?;

        Ok(Self { client, settings })
    }

    pub fn from_config(config: &FileProviderConfig) -> Result<Self, GatewayError> {
        Self::new(ChatCompletionsSettings::from_config(config)?)
    }

    pub fn endpoint(&self) -> &str {
        &self.settings.endpoint
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.settings.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        }
    }
}

#[async_trait]
impl LlmGateway for ChatCompletionsGateway {
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        debug!(
            "POST {} (model {}, {} prompt bytes)",
            self.settings.endpoint,
            self.settings.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(&self.settings.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        debug!("Generation service answered {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Generation service error {}: {}", status, body);
            return Err(GatewayError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| GatewayError::UnexpectedResponse(e.to_string()))?;
        extract_completion_text(&value)
    }

    fn model_name(&self) -> &str {
        &self.settings.model
    }
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::ConnectionError(e.to_string())
    }
}

/// Reply text from a response body.
///
/// Accepts `choices[0].message.content` (chat), `choices[0].text`
/// (legacy completions) and a top-level `output` string.
pub fn extract_completion_text(value: &Value) -> Result<String, GatewayError> {
    let first_choice = value.get("choices").and_then(|c| c.get(0));

    first_choice
        .and_then(|choice| choice.pointer("/message/content"))
        .or_else(|| first_choice.and_then(|choice| choice.get("text")))
        .or_else(|| value.get("output"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| GatewayError::UnexpectedResponse(truncate(&value.to_string(), 200)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings() -> ChatCompletionsSettings {
        ChatCompletionsSettings {
            endpoint: "https://api.mistral.ai/v1/chat/completions".to_string(),
            model: "mistral-small-latest".to_string(),
            api_key: "sk-test".to_string(),
            max_tokens: 2000,
            temperature: 0.2,
            timeout: None,
        }
    }

    #[test]
    fn test_extract_chat_shape() {
        let body = json!({
            "id": "cmpl-1",
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": "<xml/>" } }]
        });
        assert_eq!(extract_completion_text(&body), Ok("<xml/>".to_string()));
    }

    #[test]
    fn test_extract_legacy_and_output_shapes() {
        assert_eq!(
            extract_completion_text(&json!({ "choices": [{ "text": "legacy" }] })),
            Ok("legacy".to_string())
        );
        assert_eq!(
            extract_completion_text(&json!({ "output": "bare" })),
            Ok("bare".to_string())
        );
    }

    #[test]
    fn test_extract_unknown_shape() {
        for body in [json!({ "choices": [] }), json!({ "result": "x" }), json!({ "output": 3 })] {
            assert!(matches!(
                extract_completion_text(&body),
                Err(GatewayError::UnexpectedResponse(_))
            ));
        }
    }

    #[test]
    fn test_request_body() {
        let gateway = ChatCompletionsGateway::new(settings()).unwrap();
        let body = serde_json::to_value(gateway.request_body("Hello")).unwrap();

        assert_eq!(body["model"], "mistral-small-latest");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "Hello");
        assert_eq!(body["max_tokens"], 2000);
        assert!((body["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
        assert_eq!(gateway.model_name(), "mistral-small-latest");
    }

    #[test]
    fn test_settings_require_api_key() {
        let config = FileProviderConfig {
            api_key_env: "DSLGEN_TEST_SURELY_UNSET_KEY".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            ChatCompletionsSettings::from_config(&config),
            Err(GatewayError::Configuration(_))
        ));

        let config = FileProviderConfig {
            api_key: Some("sk-inline".to_string()),
            timeout_seconds: Some(30),
            ..Default::default()
        };
        let settings = ChatCompletionsSettings::from_config(&config).unwrap();
        assert_eq!(settings.api_key, "sk-inline");
        assert_eq!(settings.timeout, Some(Duration::from_secs(30)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connection_error() {
        let gateway = ChatCompletionsGateway::new(ChatCompletionsSettings {
            endpoint: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            timeout: Some(Duration::from_secs(5)),
            ..settings()
        })
        .unwrap();

        let err = gateway.complete("Hello").await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::ConnectionError(_) | GatewayError::Timeout
        ));
    }
}
