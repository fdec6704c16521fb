//! Network transport for the chat session.
//!
//! Two operations against a candidate base URL: a liveness probe
//! (`GET {base}/api/health`, success = HTTP 2xx, body ignored) and a
//! message exchange (`POST {base}/api/chatbot`, success = HTTP 2xx AND
//! a truthy success flag in the body). The trait seam exists so tests
//! can script candidate behavior without a network.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use veltrix_core::error::ClientError;
use veltrix_core::message::HistoryEntry;

/// The message-exchange request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// The user's message text.
    pub message: String,
    /// Up to the 3 most recent prior messages, oldest first.
    pub conversation_history: Vec<HistoryEntry>,
    /// Freshly assembled site knowledge.
    pub website_knowledge: String,
}

/// The message-exchange response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub success: bool,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One network hop against a single candidate. Implementations do not
/// retry or fall back; the session owns candidate iteration.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Liveness probe against one candidate.
    async fn probe(&self, base_url: &str) -> Result<(), ClientError>;

    /// Message exchange against one candidate. Returns the bot's reply
    /// text on structural success.
    async fn exchange(&self, base_url: &str, request: &ChatRequest)
    -> Result<String, ClientError>;
}

/// Production transport over reqwest.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn probe(&self, base_url: &str) -> Result<(), ClientError> {
        let url = format!("{base_url}/api/health");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::ApiError {
                status_code: status.as_u16(),
                message: "health check failed".into(),
            })
        }
    }

    async fn exchange(
        &self,
        base_url: &str,
        request: &ChatRequest,
    ) -> Result<String, ClientError> {
        let url = format!("{base_url}/api/chatbot");
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::ApiError {
                status_code: status,
                message: body,
            });
        }

        let reply: ChatReply = response.json().await.map_err(|e| ClientError::ApiError {
            status_code: status,
            message: format!("Failed to parse response: {e}"),
        })?;

        match reply {
            ChatReply {
                success: true,
                response: Some(text),
                ..
            } => Ok(text),
            ChatReply { message, .. } => Err(ClientError::Unsuccessful(
                message.unwrap_or_else(|| "Failed to get response".into()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veltrix_core::message::Sender;

    #[test]
    fn request_serializes_camel_case() {
        let request = ChatRequest {
            message: "hello".into(),
            conversation_history: vec![HistoryEntry {
                sender: Sender::Bot,
                text: "hi".into(),
            }],
            website_knowledge: "blob".into(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"conversationHistory\""));
        assert!(json.contains("\"websiteKnowledge\""));
        assert!(json.contains("\"message\":\"hello\""));
    }

    #[test]
    fn reply_parses_success_body() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"success":true,"response":"Hello!"}"#).unwrap();
        assert!(reply.success);
        assert_eq!(reply.response.as_deref(), Some("Hello!"));
        assert!(reply.message.is_none());
    }

    #[test]
    fn reply_parses_failure_body() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"success":false,"message":"upstream down"}"#).unwrap();
        assert!(!reply.success);
        assert_eq!(reply.message.as_deref(), Some("upstream down"));
    }
}
