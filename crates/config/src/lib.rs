//! Configuration loading and validation for Veltrix.
//!
//! Loads configuration from `~/.veltrix/config.toml` with environment
//! variable overrides for secrets. Every field has a serde default so
//! a missing file or an empty file yields a working configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.veltrix/config.toml`.
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream AI completion provider settings
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Transactional email relay settings
    #[serde(default)]
    pub mail: MailConfig,

    /// Endpoint candidates used by the chat session client
    #[serde(default)]
    pub endpoints: EndpointsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    3001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of an OpenAI-compatible completion API
    #[serde(default = "default_upstream_url")]
    pub base_url: String,

    /// API key; usually supplied via `VELTRIX_UPSTREAM_API_KEY`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_upstream_url() -> String {
    "https://openrouter.ai/api/v1".into()
}
fn default_model() -> String {
    "anthropic/claude-sonnet-4".into()
}
fn default_temperature() -> f32 {
    0.7
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_url(),
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Base URL of the transactional email relay's HTTP API
    #[serde(default = "default_mail_api_base")]
    pub api_base: String,

    /// Relay API key; usually supplied via `VELTRIX_MAIL_API_KEY`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_from_name")]
    pub from_name: String,

    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// Where admin notifications for contact submissions land
    #[serde(default = "default_from_email")]
    pub admin_email: String,
}

fn default_mail_api_base() -> String {
    "https://api.brevo.com".into()
}
fn default_from_name() -> String {
    "Veltrix Labs".into()
}
fn default_from_email() -> String {
    "hello@veltrixlabs.com".into()
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_base: default_mail_api_base(),
            api_key: None,
            from_name: default_from_name(),
            from_email: default_from_email(),
            admin_email: default_from_email(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// Deployment-specific override, highest-priority configured URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_url: Option<String>,

    #[serde(default = "default_production_url")]
    pub production_url: String,

    #[serde(default = "default_local_url")]
    pub local_url: String,
}

fn default_production_url() -> String {
    "https://api.veltrixlabs.com".into()
}
fn default_local_url() -> String {
    "http://localhost:3001".into()
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            override_url: None,
            production_url: default_production_url(),
            local_url: default_local_url(),
        }
    }
}

/// Redact a secret for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("server", &self.server)
            .field("upstream", &self.upstream)
            .field("mail", &self.mail)
            .field("endpoints", &self.endpoints)
            .finish()
    }
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &redact(&self.api_key))
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("api_base", &self.api_base)
            .field("api_key", &redact(&self.api_key))
            .field("from_name", &self.from_name)
            .field("from_email", &self.from_email)
            .field("admin_email", &self.admin_email)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.veltrix/config.toml).
    ///
    /// Environment variable overrides (highest priority):
    /// - `VELTRIX_UPSTREAM_API_KEY` — upstream completion API key
    /// - `VELTRIX_MAIL_API_KEY` — mail relay API key
    /// - `VELTRIX_API_URL` — client endpoint override URL
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if config.upstream.api_key.is_none() {
            config.upstream.api_key = std::env::var("VELTRIX_UPSTREAM_API_KEY").ok();
        }
        if config.mail.api_key.is_none() {
            config.mail.api_key = std::env::var("VELTRIX_MAIL_API_KEY").ok();
        }
        if config.endpoints.override_url.is_none() {
            config.endpoints.override_url = std::env::var("VELTRIX_API_URL").ok();
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".veltrix")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.upstream.temperature) {
            return Err(ConfigError::ValidationError(
                "upstream.temperature must be between 0.0 and 2.0".into(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be nonzero".into(),
            ));
        }

        Ok(())
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
