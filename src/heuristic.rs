//! Struct-literal repair: best-effort rewrite of almost-JSON into JSON.
//!
//! Debug-printed struct literals (Go's `%+v`, pointer dumps) land in logs as
//! text that has brace/colon structure but fails strict decoding: unquoted
//! keys, `&TypeName{...}` pointer prefixes, bare `nil` tokens. This module
//! applies an ordered list of pure regex substitutions that approximate the
//! JSON grammar, then retries the strict decoder once.
//!
//! The rules are syntactic, run in a single pass each, and are not
//! fixpoint-iterated. They can mangle string values that themselves contain
//! `key:` shapes, and they give up on nested unquoted structs whose inner
//! keys lose their delimiting context. Both limits are accepted: the repair
//! either yields text that decodes or the caller gets `None` — a wrong but
//! decodable repair is not detectable here.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::decoder;

/// Rule 1: collapse a pointer-sigil-and-type-name prefix into a bare brace.
///
/// `&Config{...}` → `{...}`. Type names may be dotted (`&pkg.Config{`).
fn strip_type_prefix(text: &str) -> Cow<'_, str> {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"&\s*[A-Za-z_][A-Za-z0-9_.]*\s*\{").unwrap());
    RE.replace_all(text, "{")
}

/// Rule 2: quote bare identifier keys whose value is a quoted string.
///
/// `{key:"v"` / `,key:"v"` → `{"key":"v"`.
fn quote_string_keys(text: &str) -> Cow<'_, str> {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r#"([{,]\s*)([A-Za-z_][A-Za-z0-9_]*)\s*:\s*""#).unwrap());
    RE.replace_all(text, "${1}\"${2}\":\"")
}

/// Rule 3: collapse doubled key quotes left by a repeated repair.
///
/// `""key"":` → `"key":`. Keeps a second application of the key-quoting
/// rules idempotent when already-repaired text comes back through.
fn collapse_doubled_key_quotes(text: &str) -> Cow<'_, str> {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r#"""([A-Za-z_][A-Za-z0-9_]*)""(\s*:)"#).unwrap());
    RE.replace_all(text, "\"${1}\"${2}")
}

/// Rule 4: quote bare identifier keys whose value is a bare scalar token
/// (`true`, `false`, `nil`, `<nil>`, or a number).
fn quote_scalar_keys(text: &str) -> Cow<'_, str> {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"([{,]\s*)([A-Za-z_][A-Za-z0-9_]*)\s*:\s*(true\b|false\b|nil\b|<nil>|-?\.?[0-9])")
            .unwrap()
    });
    RE.replace_all(text, "${1}\"${2}\":${3}")
}

/// Rule 5: normalize a bare `nil` / `<nil>` token after a colon to `null`.
fn nil_to_null(text: &str) -> Cow<'_, str> {
    static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":(\s*)(?:<nil>|nil\b)").unwrap());
    RE.replace_all(text, ":${1}null")
}

/// Rule 6: quote bare identifier keys whose value opens a list or a nested
/// brace. Inner contents are not repaired by this rule; one level of nested
/// struct keys is usually caught by rule 2 running first.
fn quote_container_keys(text: &str) -> Cow<'_, str> {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"([{,]\s*)([A-Za-z_][A-Za-z0-9_]*)\s*:(\s*[\[{])").unwrap());
    RE.replace_all(text, "${1}\"${2}\":${3}")
}

/// Apply all rewrite rules once, in order.
pub fn rewrite(text: &str) -> String {
    let text = strip_type_prefix(text);
    let text = quote_string_keys(&text);
    let text = collapse_doubled_key_quotes(&text);
    let text = quote_scalar_keys(&text);
    let text = nil_to_null(&text);
    let text = quote_container_keys(&text);
    text.into_owned()
}

/// Rewrite `text` and retry the strict decoder.
///
/// The retry is anchored the same way the boundary locator anchors: first on
/// the whole rewritten text, then from its first `{` (rule 1 may have
/// collapsed a `&Type` prefix into that brace). Returns `None` when the text
/// has no brace/colon structure at all or still fails to decode.
pub fn repair(text: &str) -> Option<serde_json::Value> {
    // Cheap pre-filter: without a brace and a colon there is nothing to fix.
    if !text.contains('{') || !text.contains(':') {
        return None;
    }

    let fixed = rewrite(text);
    if let Some(value) = decoder::decode(&fixed) {
        return Some(value);
    }
    let start = fixed.find('{')?;
    decoder::decode(&fixed[start..])
}
