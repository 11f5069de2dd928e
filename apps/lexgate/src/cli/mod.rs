//! # Lexgate CLI Module
//!
//! This module implements the CLI interface for Lexgate.
//!
//! ## Available Commands
//!
//! - `server` - Run the edge gate in front of the upstream origin
//! - `check` - Evaluate the gate for a single path
//! - `routes` - Print the compiled-in route table

mod commands;

use clap::{Parser, Subcommand};
use lexgate_core::LexgateError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Lexgate - Locale-Aware Edge Gate
///
/// Fronts the vocabulary app's rendering origin and decides, per
/// request, whether to render, send the visitor to login, or send them
/// home.
#[derive(Parser, Debug)]
#[command(name = "lexgate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the edge gate server
    Server {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Upstream origin to forward allowed traffic to
        #[arg(short, long)]
        upstream: Option<String>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Evaluate the gate for a single path
    Check {
        /// Request path to evaluate (e.g. /vi/dashboard)
        path: String,

        /// Treat the visitor as signed in
        #[arg(short, long)]
        authenticated: bool,
    },

    /// Print the compiled-in route table
    Routes,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), LexgateError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server {
            host,
            port,
            upstream,
            config,
        }) => cmd_server(host, port, upstream, config.as_deref()).await,
        Some(Commands::Check {
            path,
            authenticated,
        }) => cmd_check(&path, authenticated, json_mode),
        Some(Commands::Routes) => cmd_routes(json_mode),
        None => {
            // No subcommand - show the route table by default
            cmd_routes(json_mode)
        }
    }
}
