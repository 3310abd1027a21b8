//! Command-line argument definitions for `jex`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use clap::Parser;

/// Recover embedded and malformed JSON structures from log lines.
///
/// Reads lines from stdin; for each line that contains a decodable JSON
/// object — strictly valid, embedded after a prefix, or repairable
/// struct-dump notation — the recovered value is written to stdout as JSON.
/// Lines with no recoverable structure pass through unchanged.
#[derive(Debug, Parser)]
#[command(name = "jex", version, about, long_about = None)]
pub struct Cli {
    /// JSON key inspected for embedded structure at the top level.
    #[arg(short = 'm', long)]
    pub message_key: Option<String>,

    /// Key under which structure recovered from the message is attached.
    #[arg(short = 'i', long)]
    pub inner_key: Option<String>,

    /// Output compact JSON instead of pretty-printed.
    #[arg(short = 'C', long)]
    pub compact: bool,

    /// Recover structure inside every string member, at any nesting depth.
    ///
    /// Each string member that itself decodes (or repairs) to JSON is
    /// replaced by its recovered value, recursively up to `--max-depth`.
    #[arg(short = 'd', long)]
    pub deep: bool,

    /// Suppress lines with no recovered structure instead of passing them
    /// through.
    #[arg(short = 's', long)]
    pub skip_raw: bool,

    /// Disable the struct-literal repair pass (accept strict JSON only).
    #[arg(long)]
    pub no_heuristic: bool,

    /// Maximum line length in bytes considered for extraction.
    ///
    /// Longer lines pass through untouched. Set to `0` to disable the bound.
    #[arg(short = 'M', long)]
    pub max_line_length: Option<usize>,

    /// Maximum recursion depth for `--deep` recovery.
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,
}
