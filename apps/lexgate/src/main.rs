//! # Lexgate - Locale-Aware Edge Gate
//!
//! The main binary for the Lexgate edge.
//!
//! This application fronts the vocabulary app's rendering origin and
//! decides, per request, whether to render, send the visitor to login,
//! or send them home.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                    apps/lexgate (THE BINARY)                   │
//! │                                                                │
//! │  ┌─────────────┐    ┌──────────────┐    ┌──────────────────┐  │
//! │  │   CLI       │    │  HTTP Edge   │    │    Forwarder     │  │
//! │  │  (clap)     │    │   (axum)     │    │   (reqwest)      │  │
//! │  └──────┬──────┘    └──────┬───────┘    └────────┬─────────┘  │
//! │         │                  │                     │            │
//! │         └──────────────────┼─────────────────────┘            │
//! │                            ▼                                  │
//! │                    ┌───────────────┐                          │
//! │                    │ lexgate-core  │                          │
//! │                    │  (THE LOGIC)  │                          │
//! │                    └───────────────┘                          │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Run the edge in front of the renderer
//! lexgate server --host 0.0.0.0 --port 8080 --upstream http://127.0.0.1:3000
//!
//! # CLI operations
//! lexgate check /vi/dashboard
//! lexgate check /login --authenticated
//! lexgate routes
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing — LEXGATE_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("LEXGATE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "lexgate=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = lexgate::cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = lexgate::cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Lexgate startup banner.
fn print_banner() {
    println!(
        r#"
  ██╗     ███████╗██╗  ██╗ ██████╗  █████╗ ████████╗███████╗
  ██║     ██╔════╝╚██╗██╔╝██╔════╝ ██╔══██╗╚══██╔══╝██╔════╝
  ██║     █████╗   ╚███╔╝ ██║  ███╗███████║   ██║   █████╗
  ██║     ██╔══╝   ██╔██╗ ██║   ██║██╔══██║   ██║   ██╔══╝
  ███████╗███████╗██╔╝ ██╗╚██████╔╝██║  ██║   ██║   ███████╗
  ╚══════╝╚══════╝╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═╝   ╚═╝   ╚══════╝

  Locale-Aware Edge Gate v{}

  Pure • Total • Per-Request
"#,
        env!("CARGO_PKG_VERSION")
    );
}
