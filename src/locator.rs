//! Boundary locator: find the longest valid JSON span in a line.
//!
//! Log lines commonly carry noise on both sides of the structured part —
//! a timestamp or level tag before the object, free text after it. The
//! locator anchors at the first `{` and shrinks the end boundary one
//! character at a time until a candidate decodes, so the result is the
//! longest JSON value that begins exactly at the first brace.
//!
//! Worst-case cost is quadratic in the span length. That is acceptable for
//! log lines; callers handling untrusted input cap the line length before
//! calling in (see `Config::max_line_length`).

use crate::decoder;

/// Locate and decode the longest JSON value anchored at the first `{`.
///
/// Returns `None` when the line has no `{` or no candidate span decodes.
/// Only the first (leftmost) brace is ever used as the anchor; the locator
/// never rescans from a later brace, even if valid JSON exists there.
pub fn locate(line: &str) -> Option<serde_json::Value> {
    let start = line.find('{')?;
    let tail = &line[start..];

    // Candidate end boundaries, longest first, down to the lone brace.
    // Iterating char boundaries keeps the slices valid UTF-8.
    for end in char_ends_rev(tail) {
        if let Some(value) = decoder::decode(&tail[..end]) {
            return Some(value);
        }
    }
    None
}

/// Byte offsets of each char end within `s`, from the full length down to 1.
fn char_ends_rev(s: &str) -> impl Iterator<Item = usize> + '_ {
    s.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_locate_whole_line() {
        assert_eq!(locate(r#"{"a":1}"#), Some(json!({"a":1})));
    }

    #[test]
    fn test_locate_with_prefix() {
        let line = r#"2025-10-16T02:53:16Z INFO {"user":"bob"}"#;
        assert_eq!(locate(line), Some(json!({"user":"bob"})));
    }

    #[test]
    fn test_locate_with_trailing_text() {
        let line = r#"{"a":1} and then some trailing words"#;
        assert_eq!(locate(line), Some(json!({"a":1})));
    }

    #[test]
    fn test_locate_longest_match_wins() {
        // Both the short and the long span decode; longest-first ordering
        // must return the outer object, not `{"a":1}` from some inner cut.
        let line = r#"{"a":{"b":2}} tail"#;
        assert_eq!(locate(line), Some(json!({"a":{"b":2}})));
    }

    #[test]
    fn test_locate_first_brace_only() {
        // The anchor is the leftmost brace even when a later object would
        // be "more complete" — `{"a":1}` wins, `{"b":2}` is never tried.
        let line = r#"{"a":1} extra {"b":2}"#;
        assert_eq!(locate(line), Some(json!({"a":1})));
    }

    #[test]
    fn test_locate_invalid_first_brace_does_not_rescan() {
        // First brace opens an invalid span; the locator does not retry
        // from the later valid object.
        let line = r#"value={count} {"level":"info"}"#;
        assert_eq!(locate(line), None);
    }

    #[test]
    fn test_locate_no_brace() {
        assert_eq!(locate("plain text, no braces at all"), None);
    }

    #[test]
    fn test_locate_lone_brace() {
        assert_eq!(locate("{"), None);
        assert_eq!(locate("tail {"), None);
    }

    #[test]
    fn test_locate_unbalanced() {
        assert_eq!(locate(r#"{"a": 1"#), None);
    }

    #[test]
    fn test_locate_escaped_braces_inside_string() {
        let line = r#"{"msg":"brace \" { inside"} trailing"#;
        assert_eq!(locate(line), Some(json!({"msg":"brace \" { inside"})));
    }

    #[test]
    fn test_locate_multibyte_prefix_and_tail() {
        let line = "日志 {\"k\":\"值\"} 尾部";
        assert_eq!(locate(line), Some(json!({"k":"值"})));
    }

    #[test]
    fn test_locate_array_not_anchored() {
        // No brace anywhere → no match, even though the array is valid JSON.
        assert_eq!(locate("[1,2,3]"), None);
    }

    #[test]
    fn test_locate_empty_object() {
        assert_eq!(locate("before {} after"), Some(json!({})));
    }
}
