//! Veltrix CLI — the main entry point.
//!
//! Commands:
//! - `init`      — Create the config directory and default config file
//! - `serve`     — Start the HTTP backend
//! - `chat`      — Talk to a running backend from the terminal
//! - `knowledge` — Print the assembled site knowledge blob

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "veltrix",
    about = "Veltrix Labs — site backend and chat client",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the config directory and a default config file
    Init,

    /// Start the HTTP backend server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Chat with the backend from the terminal
    Chat,

    /// Print the assembled site knowledge blob
    Knowledge {
        /// Print size statistics instead of the blob itself
        #[arg(long)]
        stats: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Init => commands::init::run().await?,
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Chat => commands::chat::run().await?,
        Commands::Knowledge { stats } => commands::knowledge::run(stats).await?,
    }

    Ok(())
}
