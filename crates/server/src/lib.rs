//! HTTP backend for the Veltrix site.
//!
//! Three endpoints: a health check the client probes for liveness, a
//! chatbot endpoint proxying to the completion provider, and a contact
//! form relay that dispatches two templated emails per submission.
//!
//! Built on Axum.

pub mod upstream;

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use veltrix_core::message::HistoryEntry;
use veltrix_mailer::{ContactSubmission, Mailer, templates};

use upstream::{Completion, CompletionRequest};

/// Shared application state.
pub struct AppState {
    pub completion: Arc<dyn Completion>,
    pub mailer: Arc<dyn Mailer>,
    pub config: veltrix_config::AppConfig,
}

type SharedState = Arc<AppState>;

/// Build the Axum router with all routes and layers.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/chatbot", post(chatbot_handler))
        .route("/api/contact", post(contact_handler))
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn start(config: veltrix_config::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = Arc::new(AppState {
        completion: Arc::new(upstream::HttpCompletion::new(config.upstream.clone())),
        mailer: Arc::new(veltrix_mailer::HttpMailer::new(config.mail.clone())),
        config,
    });

    let app = build_router(state);

    info!(addr = %addr, "Server starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Server is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatbotRequest {
    message: String,
    #[serde(default)]
    conversation_history: Vec<HistoryEntry>,
    #[serde(default)]
    website_knowledge: String,
}

#[derive(Serialize)]
struct ChatbotResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ChatbotResponse {
    fn ok(response: String) -> Self {
        Self {
            success: true,
            response: Some(response),
            message: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            response: None,
            message: Some(message.into()),
        }
    }
}

async fn chatbot_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatbotRequest>,
) -> (StatusCode, Json<ChatbotResponse>) {
    if payload.message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ChatbotResponse::err("Message is required")),
        );
    }

    let request = CompletionRequest {
        system_prompt: payload.website_knowledge,
        history: payload.conversation_history,
        message: payload.message,
    };

    match state.completion.complete(&request).await {
        Ok(reply) => (StatusCode::OK, Json(ChatbotResponse::ok(reply))),
        Err(e) => {
            error!(error = %e, "Completion request failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ChatbotResponse::err(
                    "Failed to get a response from the AI service. Please try again later.",
                )),
            )
        }
    }
}

#[derive(Serialize)]
struct ContactResponse {
    success: bool,
    message: &'static str,
}

static EMAIL_RE: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex")
});

static PHONE_RE: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r"^[\d\s\-\+\(\)]+$").expect("invalid phone regex")
});

fn validate_submission(submission: &ContactSubmission) -> Option<&'static str> {
    if submission.name.is_empty()
        || submission.email.is_empty()
        || submission.phone.is_empty()
        || submission.message.is_empty()
    {
        return Some("All fields are required");
    }
    if !EMAIL_RE.is_match(&submission.email) {
        return Some("Invalid email format");
    }
    if !PHONE_RE.is_match(&submission.phone) || submission.phone.len() < 10 {
        return Some("Invalid phone number. Must be at least 10 digits.");
    }
    None
}

async fn contact_handler(
    State(state): State<SharedState>,
    Json(submission): Json<ContactSubmission>,
) -> (StatusCode, Json<ContactResponse>) {
    if let Some(message) = validate_submission(&submission) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ContactResponse {
                success: false,
                message,
            }),
        );
    }

    let admin = templates::admin_notification(&submission, &state.config.mail.admin_email);
    let reply = templates::user_auto_reply(&submission);

    let (admin_result, reply_result) =
        tokio::join!(state.mailer.send(&admin), state.mailer.send(&reply));

    match admin_result.and(reply_result) {
        Ok(()) => {
            info!(from = %submission.email, "Contact form relayed");
            (
                StatusCode::OK,
                Json(ContactResponse {
                    success: true,
                    message: "Email sent successfully!",
                }),
            )
        }
        Err(e) => {
            error!(error = %e, "Contact form email dispatch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactResponse {
                    success: false,
                    message: "Failed to send email. Please try again later.",
                }),
            )
        }
    }
}
