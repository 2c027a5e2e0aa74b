//! Completion client for an OpenAI-compatible chat-completions endpoint.
//!
//! Failures never escape [`Completion::extract`]: they are logged and the row
//! degrades to an all-NULL record downstream. No retries are attempted.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::{config::Settings, extract::prompt};

/// Connection parameters for the completion service.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Base URL up to and including the API version, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl LlmConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            base_url: settings.llm_base_url.clone(),
            api_key: settings.llm_api_key.clone(),
            model: settings.model.clone(),
            timeout: settings.request_timeout,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Produces raw model text for one article, or `None` when the call failed.
#[async_trait]
pub trait Completion: Send + Sync {
    async fn extract(&self, title: &str, abstract_text: &str) -> Option<String>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    config: LlmConfig,
}

impl ChatClient {
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .user_agent(concat!("oer-extract/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send one system + user exchange and return the trimmed reply.
    pub async fn complete(&self, user_prompt: &str) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: prompt::SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
        };

        let response = self
            .client
            .post(self.config.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: ChatResponse = response.json().await?;
        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyContent)?;

        debug!(chars = content.len(), "completion received");
        Ok(content.trim().to_string())
    }
}

#[async_trait]
impl Completion for ChatClient {
    async fn extract(&self, title: &str, abstract_text: &str) -> Option<String> {
        let user_prompt = prompt::render_prompt(title, abstract_text);
        match self.complete(&user_prompt).await {
            Ok(text) => Some(text),
            Err(err) => {
                error!(model = %self.config.model, %err, "API error");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> LlmConfig {
        LlmConfig {
            base_url: base_url.to_string(),
            api_key: "test-key".to_string(),
            model: "gpt-4o".to_string(),
            timeout: Duration::from_secs(2),
        }
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        assert_eq!(
            config("https://api.openai.com/v1/").endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            config("http://localhost:8000/v1").endpoint(),
            "http://localhost:8000/v1/chat/completions"
        );
    }

    #[test]
    fn request_carries_system_then_user_message() {
        let body = ChatRequest {
            model: "gpt-4o",
            messages: [
                ChatMessage {
                    role: "system",
                    content: prompt::SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: "hello",
                },
            ],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hello");
    }

    #[test]
    fn response_without_choices_deserializes_empty() {
        let payload: ChatResponse = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert!(payload.choices.is_empty());
    }

    #[tokio::test]
    async fn transport_failure_degrades_to_none() {
        // nothing listens on port 1
        let client = ChatClient::new(config("http://127.0.0.1:1/v1")).unwrap();
        assert!(matches!(
            client.complete("ping").await,
            Err(LlmError::Http(_))
        ));
        assert_eq!(client.extract("title", "abstract").await, None);
    }
}
