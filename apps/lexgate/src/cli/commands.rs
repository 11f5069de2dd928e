//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::api;
use crate::config::ServerConfig;
use lexgate_core::LexgateError;
use lexgate_core::evaluate;
use lexgate_core::primitives::{
    AUTH_PREFIXES, DEFAULT_LOCALE, PROTECTED_PREFIXES, SUPPORTED_LOCALES,
};
use std::path::Path;

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the edge gate server.
pub async fn cmd_server(
    host: Option<String>,
    port: Option<u16>,
    upstream: Option<String>,
    config_path: Option<&Path>,
) -> Result<(), LexgateError> {
    let file_config = match config_path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    let resolved = file_config.resolve(host, port, upstream);

    println!("Lexgate Edge Gate Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:     {}", resolved.host);
    println!("  Port:     {}", resolved.port);
    println!("  Upstream: {}", resolved.upstream);
    println!();
    println!("Endpoints:");
    println!("  GET  /health      - Health check");
    println!("  POST /gate/decide - Decision dry-run");
    println!("  GET  /gate/routes - Route table");
    println!("  *                 - Gated and forwarded upstream");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let state = api::AppState::new(&resolved.upstream)?;
    let addr = format!("{}:{}", resolved.host, resolved.port);
    api::run_server(&addr, state).await
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Evaluate the gate for one path and print the decision.
pub fn cmd_check(path: &str, authenticated: bool, json_mode: bool) -> Result<(), LexgateError> {
    let decision = evaluate(path, authenticated);

    if json_mode {
        let output = serde_json::json!({
            "path": path,
            "authenticated": authenticated,
            "decision": decision.kind(),
            "locale": decision.locale().as_str(),
            "location": decision.location(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Gate Decision");
    println!("=============");
    println!("Path:          {}", path);
    println!("Authenticated: {}", authenticated);
    println!("Locale:        {}", decision.locale());
    match decision.location() {
        Some(target) => println!("Decision:      redirect -> {}", target),
        None => println!("Decision:      allow"),
    }

    Ok(())
}

// =============================================================================
// ROUTES COMMAND
// =============================================================================

/// Print the compiled-in route table.
pub fn cmd_routes(json_mode: bool) -> Result<(), LexgateError> {
    if json_mode {
        let output = serde_json::json!({
            "default_locale": DEFAULT_LOCALE,
            "locales": SUPPORTED_LOCALES,
            "protected": PROTECTED_PREFIXES,
            "auth": AUTH_PREFIXES,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Lexgate Route Table");
    println!("===================");
    println!(
        "Locales: {} (default: {})",
        SUPPORTED_LOCALES.join(", "),
        DEFAULT_LOCALE
    );
    println!();
    println!("Protected (session required):");
    for prefix in PROTECTED_PREFIXES {
        println!("  {}", prefix);
    }
    println!();
    println!("Auth-only (signed-in visitors sent home):");
    for prefix in AUTH_PREFIXES {
        println!("  {}", prefix);
    }
    println!();
    println!("Entry (/ and bare locale codes): login or dashboard by session");

    Ok(())
}
