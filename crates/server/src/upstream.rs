//! Completion provider the chatbot endpoint proxies to.
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint. The
//! `Completion` trait is the seam the handler depends on so tests can
//! script the upstream without a network.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use veltrix_config::UpstreamConfig;
use veltrix_core::error::UpstreamError;
use veltrix_core::message::{HistoryEntry, Sender};

/// One chat completion to run: the knowledge blob as system context,
/// recent history, then the new user message.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub history: Vec<HistoryEntry>,
    pub message: String,
}

/// A single completion round-trip. No retries; the handler maps any
/// failure to one upstream-error response.
#[async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, UpstreamError>;
}

/// Production provider over an OpenAI-compatible HTTP API.
pub struct HttpCompletion {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl HttpCompletion {
    pub fn new(config: UpstreamConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");
        Self { client, config }
    }

    /// Flatten the request into the provider's message format.
    fn to_api_messages(request: &CompletionRequest) -> Vec<ApiMessage> {
        let mut messages = Vec::with_capacity(request.history.len() + 2);
        messages.push(ApiMessage {
            role: "system".into(),
            content: request.system_prompt.clone(),
        });
        for entry in &request.history {
            messages.push(ApiMessage {
                role: match entry.sender {
                    Sender::User => "user".into(),
                    Sender::Bot => "assistant".into(),
                },
                content: entry.text.clone(),
            });
        }
        messages.push(ApiMessage {
            role: "user".into(),
            content: request.message.clone(),
        });
        messages
    }
}

#[async_trait]
impl Completion for HttpCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, UpstreamError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            UpstreamError::AuthenticationFailed("no completion API key configured".into())
        })?;

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let body = serde_json::json!({
            "model": self.config.model,
            "messages": Self::to_api_messages(request),
            "temperature": self.config.temperature,
            "stream": false,
        });

        debug!(model = %self.config.model, "Sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 429 {
            return Err(UpstreamError::RateLimited);
        }

        if status == 401 || status == 403 {
            return Err(UpstreamError::AuthenticationFailed(
                "Invalid API key or insufficient permissions".into(),
            ));
        }

        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Completion provider returned error");
            return Err(UpstreamError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_response: ApiResponse =
            response.json().await.map_err(|e| UpstreamError::ApiError {
                status_code: 200,
                message: format!("Failed to parse response: {e}"),
            })?;

        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(UpstreamError::EmptyResponse)?;

        Ok(content)
    }
}

// --- Wire types ---

#[derive(Debug, Serialize, Deserialize)]
struct ApiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
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

    #[test]
    fn message_order_is_system_history_user() {
        let request = CompletionRequest {
            system_prompt: "You are helpful".into(),
            history: vec![
                HistoryEntry {
                    sender: Sender::User,
                    text: "hi".into(),
                },
                HistoryEntry {
                    sender: Sender::Bot,
                    text: "hello!".into(),
                },
            ],
            message: "what next?".into(),
        };

        let messages = HttpCompletion::to_api_messages(&request);
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[2].role, "assistant");
        assert_eq!(messages[3].role, "user");
        assert_eq!(messages[3].content, "what next?");
    }

    #[test]
    fn parse_completion_response() {
        let data = r#"{"choices":[{"message":{"role":"assistant","content":"Hello there"}}]}"#;
        let parsed: ApiResponse = serde_json::from_str(data).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("Hello there")
        );
    }

    #[test]
    fn parse_empty_choices() {
        let parsed: ApiResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(parsed.choices.is_empty());
    }
}
