//! Outbound transactional email.
//!
//! The `Mailer` trait is the seam between the contact-form handler and
//! the delivery provider. The production implementation relays through
//! Brevo's HTTP API; tests substitute a recording mock.

pub mod templates;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};
use veltrix_config::MailConfig;
use veltrix_core::error::MailError;

pub use templates::ContactSubmission;

/// One fully rendered email ready for delivery.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub to: String,
    pub to_name: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

/// Delivers a single rendered email. No retries; the caller decides
/// what a failure means.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

#[derive(Serialize)]
struct BrevoAddress<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoSendRequest<'a> {
    sender: BrevoAddress<'a>,
    to: Vec<BrevoAddress<'a>>,
    subject: &'a str,
    html_content: &'a str,
    text_content: &'a str,
}

/// Relay over Brevo's transactional API (`POST /v3/smtp/email`).
pub struct HttpMailer {
    client: reqwest::Client,
    config: MailConfig,
}

impl HttpMailer {
    pub fn new(config: MailConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");
        Self { client, config }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| MailError::NotConfigured("missing relay API key".into()))?;

        let body = BrevoSendRequest {
            sender: BrevoAddress {
                email: &self.config.from_email,
                name: &self.config.from_name,
            },
            to: vec![BrevoAddress {
                email: &email.to,
                name: &email.to_name,
            }],
            subject: &email.subject,
            html_content: &email.html_body,
            text_content: &email.text_body,
        };

        let url = format!("{}/v3/smtp/email", self.config.api_base);
        debug!(to = %email.to, subject = %email.subject, "Dispatching email");

        let response = self
            .client
            .post(&url)
            .header("api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| MailError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let detail = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), %detail, "Email relay rejected the message");
            Err(MailError::ApiError {
                status_code: status.as_u16(),
                message: detail,
            })
        }
    }
}
