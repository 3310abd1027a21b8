//! Recursive recovery engine and the extraction entry point.
//!
//! [`extract`] is the one operation consumers call: it takes a raw log line
//! and returns the recovered [`serde_json::Value`], or `None` when the line
//! holds no decodable structure. Recovery layers, in order: boundary locator,
//! then the struct-literal repair pass, then — for a top-level object whose
//! message member is a string — one recursive recovery of that string,
//! attached under a synthetic key (`innerJson` by default).
//!
//! [`recover_string`] is the display-level variant applied uniformly to any
//! string member while walking an already-decoded value ([`deepen`]).
//!
//! Every path is total: any input yields `Some(value)` or `None`, never a
//! panic. Each recursive step works on a proper substring of its container,
//! so recursion terminates; [`deepen`] additionally carries an explicit
//! depth ceiling against adversarial nesting.

use serde_json::Value;

use crate::config::Config;
use crate::decoder;
use crate::heuristic;
use crate::locator;

/// Extract the structured value embedded in one raw log line.
///
/// Top-level policy: locate the longest JSON span anchored at the first
/// `{`; if that fails, run the heuristic repair on the line's tail from the
/// first `{`. When the result is an object whose `config.message_key` member
/// is a string, the same recovery runs once on that string and the result is
/// attached under `config.inner_key` (the message itself is kept).
///
/// Pure and idempotent; safe to call concurrently on independent lines.
pub fn extract(line: &str, config: &Config) -> Option<Value> {
    // Defensive bound: the locator is quadratic in the span length.
    if config.max_line_length != 0 && line.len() > config.max_line_length {
        return None;
    }

    let mut value = recover_text(line, config.heuristic)?;

    if let Value::Object(ref mut map) = value {
        let inner = match map.get(&config.message_key) {
            Some(Value::String(msg)) => recover_text(msg, config.heuristic),
            _ => None,
        };
        if let Some(inner) = inner {
            map.insert(config.inner_key.clone(), inner);
        }
    }

    Some(value)
}

/// Recover structure from any string member encountered while walking an
/// already-decoded value.
///
/// Unlike the top-level path this first tries the whole string as strict
/// JSON (so a string member holding exactly `{"a":1}` — or any bare JSON
/// value — recovers directly), then the locator, then the repair pass.
pub fn recover_string(s: &str) -> Option<Value> {
    if let Some(value) = decoder::decode(s) {
        return Some(value);
    }
    if let Some(value) = locator::locate(s) {
        return Some(value);
    }
    heuristic::repair(s)
}

/// Shared text-recovery procedure: locator, then heuristic fallback on the
/// tail from the first `{`.
fn recover_text(text: &str, heuristic_enabled: bool) -> Option<Value> {
    if let Some(value) = locator::locate(text) {
        return Some(value);
    }
    if !heuristic_enabled {
        return None;
    }
    let start = text.find('{')?;
    heuristic::repair(&text[start..])
}

/// Walk `value` and replace every string member that [`recover_string`] can
/// structure with its recovered value, recursively, down to `max_depth`
/// levels. Strings that recover nothing are left untouched.
pub fn deepen(value: &mut Value, max_depth: usize) {
    if max_depth == 0 {
        return;
    }
    match value {
        Value::Object(map) => {
            for member in map.values_mut() {
                deepen_member(member, max_depth);
            }
        }
        Value::Array(items) => {
            for member in items.iter_mut() {
                deepen_member(member, max_depth);
            }
        }
        _ => {}
    }
}

fn deepen_member(member: &mut Value, depth: usize) {
    match member {
        Value::String(s) => {
            if let Some(mut recovered) = recover_string(s) {
                deepen(&mut recovered, depth - 1);
                *member = recovered;
            }
        }
        Value::Object(_) | Value::Array(_) => deepen(member, depth - 1),
        _ => {}
    }
}
