//! Output formatting for recovered values.
//!
//! Turns the engine's `Option<Value>` outcome into output text: recovered
//! values serialize as pretty (default) or compact JSON, lines with nothing
//! recovered pass through unchanged unless suppressed. `--deep` applies the
//! display-level recovery walk before serializing, replacing every string
//! member that itself holds structure.

use crate::config::Config;
use crate::extractor;

/// Format a single line for output.
///
/// The result is written into `out`; an empty buffer after the call means
/// the line was suppressed (raw line under `skip_raw`).
pub fn format_line(line: &str, config: &Config, out: &mut String) {
    match extractor::extract(line, config) {
        Some(mut value) => {
            if config.deep {
                extractor::deepen(&mut value, config.max_depth);
            }
            out.push_str(&render(&value, config.compact));
        }
        None => {
            if config.skip_raw {
                out.clear();
                return;
            }
            // Pass through unchanged
            out.push_str(line);
        }
    }
}

/// Serialize a recovered value as JSON text.
fn render(value: &serde_json::Value, compact: bool) -> String {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    // A `Value` always serializes; the fallback keeps this path total.
    rendered.unwrap_or_default()
}
