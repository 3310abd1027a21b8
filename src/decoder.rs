//! Strict JSON decoding wrapper.
//!
//! Everything else in the engine funnels through [`decode`]: the boundary
//! locator probes candidate spans with it, and the heuristic converter
//! retries it after rewriting. The wrapper deliberately discards the
//! `serde_json` error detail — a failed decode is just "no match" to the
//! layers above, never a fault that propagates to the caller.

/// Parse `text` as a standard JSON value (RFC 8259 semantics).
///
/// Returns `None` on any parse failure. Accepts any JSON value, not only
/// objects — callers that need an object check the variant themselves.
pub fn decode(text: &str) -> Option<serde_json::Value> {
    serde_json::from_str(text).ok()
}
