//! # Error Types
//!
//! The shared error type for the Lexgate workspace.
//!
//! The gate itself is total over its input domain and never errors;
//! `LexgateError` exists for the binary's fallible edges: configuration,
//! socket binding, and upstream forwarding.

use thiserror::Error;

/// Errors produced by the Lexgate binary's fallible edges.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexgateError {
    /// Configuration could not be loaded or is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),

    /// The upstream origin could not be reached or failed mid-exchange.
    #[error("Upstream error: {0}")]
    UpstreamError(String),
}
