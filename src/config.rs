//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`~/.config/jex/config.toml` or `$XDG_CONFIG_HOME/jex/config.toml`)
//! 3. Built-in defaults

use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::JexError;

/// Default byte ceiling for lines considered for extraction. The boundary
/// locator is quadratic in the span length, so unbounded adversarial lines
/// would be a liability.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 16 * 1024;

/// Default recursion ceiling for deep string recovery.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Runtime configuration merged from defaults, config file, and CLI arguments.
///
/// Use [`Config::from_cli`] to build from parsed CLI arguments, or
/// [`Config::default`] for built-in defaults (useful in tests and benchmarks).
#[derive(Debug, Clone)]
pub struct Config {
    /// Object member inspected for embedded structure at the top level.
    pub message_key: String,
    /// Synthetic member under which recovered inner structure is attached.
    pub inner_key: String,
    /// Whether the struct-literal repair pass runs after strict decoding fails.
    pub heuristic: bool,
    /// Output compact JSON instead of pretty-printed.
    pub compact: bool,
    /// Recover structure inside every string member while formatting.
    pub deep: bool,
    /// Suppress lines with no recovered structure instead of passing them through.
    pub skip_raw: bool,
    /// Maximum line length in bytes considered for extraction. 0 = no limit.
    pub max_line_length: usize,
    /// Maximum recursion depth for deep string recovery.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            message_key: "message".to_string(),
            inner_key: "innerJson".to_string(),
            heuristic: true,
            compact: false,
            deep: false,
            skip_raw: false,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, JexError> {
        // Start with defaults
        let mut config = Self::default();

        // Load config file if it exists
        let config_path = cli.config.clone().unwrap_or_else(Self::default_config_path);

        if config_path.exists() {
            let file_config = FileConfig::load(&config_path)?;
            config.apply_file_config(file_config);
        }

        // CLI overrides
        if let Some(ref key) = cli.message_key {
            config.message_key.clone_from(key);
        }
        if let Some(ref key) = cli.inner_key {
            config.inner_key.clone_from(key);
        }
        if cli.no_heuristic {
            config.heuristic = false;
        }
        if cli.compact {
            config.compact = true;
        }
        if cli.deep {
            config.deep = true;
        }
        if cli.skip_raw {
            config.skip_raw = true;
        }
        if let Some(max_len) = cli.max_line_length {
            config.max_line_length = max_len;
        }
        if let Some(depth) = cli.max_depth {
            config.max_depth = depth;
        }

        if config.message_key.is_empty() {
            return Err(JexError::Config("message key must not be empty".into()));
        }
        if config.inner_key.is_empty() {
            return Err(JexError::Config("inner key must not be empty".into()));
        }

        Ok(config)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/jex/config.toml` or `~/.config/jex/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("jex").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("jex")
                .join("config.toml")
        } else {
            PathBuf::from(".config/jex/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) {
        if let Some(heuristic) = file.heuristic {
            self.heuristic = heuristic;
        }
        if let Some(compact) = file.compact {
            self.compact = compact;
        }
        if let Some(max_len) = file.max_line_length {
            self.max_line_length = max_len;
        }
        if let Some(depth) = file.max_depth {
            self.max_depth = depth;
        }
        if let Some(keys) = file.keys {
            if let Some(message) = keys.message {
                self.message_key = message;
            }
            if let Some(inner) = keys.inner {
                self.inner_key = inner;
            }
        }
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
struct FileConfig {
    heuristic: Option<bool>,
    compact: Option<bool>,
    max_line_length: Option<usize>,
    max_depth: Option<usize>,
    keys: Option<KeysConfig>,
}

#[derive(Debug, Deserialize)]
struct KeysConfig {
    message: Option<String>,
    inner: Option<String>,
}

impl FileConfig {
    fn load(path: &PathBuf) -> Result<Self, JexError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            JexError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
