//! # Server Configuration
//!
//! Optional TOML configuration for the `server` command.
//!
//! Resolution order for every setting: command-line flag, then config
//! file, then built-in default. The gate's route tables and locale set
//! are NOT configurable here; they are compiled into lexgate-core.

use lexgate_core::LexgateError;
use serde::Deserialize;
use std::path::Path;

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default upstream origin (the app's rendering server).
pub const DEFAULT_UPSTREAM: &str = "http://127.0.0.1:3000";

// =============================================================================
// CONFIG FILE
// =============================================================================

/// Server settings as read from a TOML file. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: Option<String>,
    /// Port to bind to.
    pub port: Option<u16>,
    /// Origin the gate forwards allowed traffic to.
    pub upstream: Option<String>,
}

impl ServerConfig {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, LexgateError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            LexgateError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        toml::from_str(&raw).map_err(|e| {
            LexgateError::InvalidConfig(format!("Invalid config '{}': {}", path.display(), e))
        })
    }

    /// Merge command-line flags over file values over defaults.
    #[must_use]
    pub fn resolve(
        &self,
        host: Option<String>,
        port: Option<u16>,
        upstream: Option<String>,
    ) -> ResolvedConfig {
        ResolvedConfig {
            host: host
                .or_else(|| self.host.clone())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: port.or(self.port).unwrap_or(DEFAULT_PORT),
            upstream: upstream
                .or_else(|| self.upstream.clone())
                .unwrap_or_else(|| DEFAULT_UPSTREAM.to_string()),
        }
    }
}

/// Fully resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub host: String,
    pub port: u16,
    pub upstream: String,
}

// =============================================================================
// TESTS
// =============================================================================
