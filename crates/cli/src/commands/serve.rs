//! `veltrix serve` — Start the HTTP backend.

use veltrix_config::AppConfig;

pub async fn run(port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port {
        config.server.port = port;
    }

    if config.upstream.api_key.is_none() {
        eprintln!();
        eprintln!("  WARNING: No completion API key configured.");
        eprintln!("  The /api/chatbot endpoint will reject every request.");
        eprintln!();
        eprintln!("  Set VELTRIX_UPSTREAM_API_KEY or add it to your config file:");
        eprintln!(
            "    {}",
            AppConfig::config_dir().join("config.toml").display()
        );
        eprintln!();
    }

    veltrix_server::start(config).await
}
