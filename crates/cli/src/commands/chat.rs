//! `veltrix chat` — Interactive chat against a running backend.

use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use veltrix_client::{ChatSession, HttpTransport, SendOutcome};
use veltrix_config::AppConfig;
use veltrix_core::status::ConnectionStatus;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let mut session = ChatSession::new(
        Arc::new(HttpTransport::new()),
        config.endpoints.clone().into(),
    );

    println!();
    println!("  Veltrix Labs — Chat");
    println!();

    eprint!("  Checking connection...");
    session.probe().await;
    eprint!("\r                        \r");

    match session.status() {
        ConnectionStatus::Connected => {
            let url = session.remembered_url().unwrap_or("unknown");
            println!("  Status: online ({url})");
        }
        _ => {
            println!("  Status: offline — messages will be answered with a fallback reply");
        }
    }
    println!();

    if let Some(greeting) = session.messages().first() {
        println!("  Assistant > {}", greeting.text);
    }
    println!();
    println!("  Type your message and press Enter.");
    println!("  Type 'exit' or Ctrl+C to quit.");
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print!("  You > ");
    std::io::stdout().flush()?;

    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input == "exit" {
            break;
        }

        match session.send_message(input).await {
            SendOutcome::Delivered | SendOutcome::Offline => {
                if let Some(reply) = session.messages().last() {
                    println!();
                    for line in reply.text.lines() {
                        println!("  Assistant > {line}");
                    }
                    println!();
                }
                if session.status() == ConnectionStatus::Disconnected {
                    println!("  [offline — check that the backend is running]");
                    println!();
                }
            }
            SendOutcome::Ignored => {}
        }

        print!("  You > ");
        std::io::stdout().flush()?;
    }

    println!();
    println!("  Goodbye!");
    println!();

    Ok(())
}
