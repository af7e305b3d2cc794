// src/sanitize.rs
//! Best-effort scrubbing of outbound request bodies. This is hygiene for
//! free-text admin input, not a security boundary; the backend validates
//! everything again on its side.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

// Matched first so the inner content goes away with the tags.
static SCRIPT_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("Invalid script block pattern")
});

static SUSPICIOUS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)</?script\b[^>]*>", // unpaired script tags
        r"(?i)</?iframe\b[^>]*>",
        r"(?i)javascript\s*:",
        r"(?i)\bon\w+\s*=", // inline event handlers: onclick=, onerror=, ...
        r"--",              // SQL comment tokens and terminator
        r"/\*",
        r"\*/",
        r";",
        r"\$\(", // shell substitution
        r"`",
        r"\.\./", // path traversal
        r"\.\.\\",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid suspicious pattern"))
    .collect()
});

/// Strip suspicious substrings and ASCII control characters from one string.
/// Newlines and tabs survive so multi-line descriptions stay readable.
pub fn sanitize_text(input: &str) -> String {
    let mut out = SCRIPT_BLOCK.replace_all(input, "").into_owned();
    for pattern in SUSPICIOUS_PATTERNS.iter() {
        out = pattern.replace_all(&out, "").into_owned();
    }
    out.chars()
        .filter(|c| !c.is_ascii_control() || *c == '\n' || *c == '\t')
        .collect()
}

/// Recursively sanitize a JSON value. Strings are rewritten wherever they
/// appear, object keys included; arrays are mapped element-wise; numbers,
/// booleans and null pass through unchanged.
pub fn sanitize_value(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(sanitize_text(&s)),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize_value).collect()),
        Value::Object(fields) => {
            let mut clean = Map::with_capacity(fields.len());
            for (key, val) in fields {
                clean.insert(sanitize_text(&key), sanitize_value(val));
            }
            Value::Object(clean)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_script_tag_stripped_with_content() {
        let body = json!({"name": "<script>alert(1)</script>Bob"});
        assert_eq!(sanitize_value(body), json!({"name": "Bob"}));
    }

    #[test]
    fn test_multiline_script_block_stripped() {
        let input = "before<script type=\"text/javascript\">\nsteal();\n</script>after";
        assert_eq!(sanitize_text(input), "beforeafter");
    }

    #[test]
    fn test_orphan_script_and_iframe_tags_stripped() {
        assert_eq!(sanitize_text("</script>hello"), "hello");
        assert_eq!(sanitize_text("<SCRIPT src=x>hello"), "hello");
        assert_eq!(sanitize_text("<iframe src=\"x\"></iframe>ok"), "ok");
    }

    #[test]
    fn test_javascript_uri_and_event_handlers() {
        assert_eq!(sanitize_text("javascript:alert(1)"), "alert(1)");
        assert_eq!(
            sanitize_text("<img src=x onerror=alert(1)>"),
            "<img src=x alert(1)>"
        );
    }

    #[test]
    fn test_sql_comment_tokens_stripped() {
        assert_eq!(sanitize_text("1' OR 1=1 --"), "1' OR 1=1 ");
        assert_eq!(sanitize_text("a /* b */ c"), "a  b  c");
        assert_eq!(sanitize_text("DROP TABLE x;"), "DROP TABLE x");
    }

    #[test]
    fn test_shell_and_traversal_sequences_stripped() {
        assert_eq!(sanitize_text("`id` et $(id)"), "id et id)");
        assert_eq!(sanitize_text("../../etc/passwd"), "etc/passwd");
    }

    #[test]
    fn test_control_characters_dropped_but_newlines_kept() {
        assert_eq!(sanitize_text("a\0b\x07c"), "abc");
        assert_eq!(sanitize_text("line1\nline2\tend"), "line1\nline2\tend");
    }

    #[test]
    fn test_recursion_covers_keys_arrays_and_nested_objects() {
        let body = json!({
            "<script>k</script>note": "ok",
            "items": ["safe", "javascript:bad"],
            "nested": {"bio": "ab--cd"}
        });
        let clean = sanitize_value(body);
        assert_eq!(
            clean,
            json!({
                "note": "ok",
                "items": ["safe", "bad"],
                "nested": {"bio": "abcd"}
            })
        );
    }

    #[test]
    fn test_non_string_values_pass_through() {
        let body = json!({"id": 42, "active": true, "score": 1.5, "gone": null});
        assert_eq!(sanitize_value(body.clone()), body);
    }

    #[test]
    fn test_clean_text_untouched() {
        let input = "Développeuse full-stack à Casablanca";
        assert_eq!(sanitize_text(input), input);
    }
}
