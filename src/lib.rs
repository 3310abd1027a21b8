//! `jex` — recover embedded and malformed JSON structures from log lines.
//!
//! This library provides the extraction engine for the `jex` CLI tool. A log
//! line may hold a well-formed JSON object, a JSON object after a non-JSON
//! prefix, string members that themselves contain escaped JSON, or debug
//! struct-dump notation (`&Type{key:"v", n:1, p:nil}`) that is almost JSON.
//! The engine locates the longest decodable span anchored at the first `{`,
//! falls back to an ordered regex repair pass, and recursively recovers
//! structure embedded in the message member.
//!
//! # Example
//!
//! ```
//! use jex::{Config, extract};
//!
//! let config = Config::default();
//! let line = r#"{"level":"info","message":"login: {\"user\":\"bob\"}"}"#;
//! let value = extract(line, &config).unwrap();
//!
//! assert_eq!(value["level"], "info");
//! assert_eq!(value["innerJson"]["user"], "bob");
//! ```

pub mod cli;
pub mod config;
pub mod decoder;
pub mod error;
pub mod extractor;
pub mod formatter;
pub mod heuristic;
pub mod locator;

// Re-export primary API types for convenience.
pub use config::Config;
pub use error::JexError;
pub use extractor::{deepen, extract, recover_string};
pub use formatter::format_line;
pub use heuristic::repair;
pub use locator::locate;
