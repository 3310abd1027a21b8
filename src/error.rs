//! Error types for the `jex` application.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Extraction itself never
//! produces an error — a line with no recoverable structure is an `Option`
//! miss, not a fault — so this enum only covers the CLI surface.

use thiserror::Error;

/// Errors that can occur in `jex`.
///
/// Maps to exit codes: [`Config`](Self::Config) → exit 1,
/// [`Io`](Self::Io) → exit 2.
#[derive(Debug, Error)]
pub enum JexError {
    /// Configuration error (invalid flag value, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),
}
