//! Helpers shared by the `key = value` config readers.

/// What: Strip a trailing `#` or `//` comment from a config value.
///
/// Inputs:
/// - `val`: Raw text after `=`.
///
/// Output:
/// - Trimmed value without the comment.
///
/// Details:
/// - A `#` only starts a comment when preceded by whitespace, so values like `#fff` survive.
pub(crate) fn strip_inline_comment(val: &str) -> &str {
    let mut cut = val.len();
    let bytes = val.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        let prev_ws = i > 0 && bytes[i - 1].is_ascii_whitespace();
        if b == b'#' && prev_ws {
            cut = i;
            break;
        }
        if b == b'/' && prev_ws && bytes.get(i + 1) == Some(&b'/') {
            cut = i;
            break;
        }
    }
    val[..cut].trim()
}

/// Interpret `true/1/yes/on` (any case) as `true`; everything else is `false`.
pub(crate) fn parse_bool(val: &str) -> bool {
    let lv = val.trim().to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

/// Normalize a raw key: lowercase with `.`, `-` and spaces mapped to `_`.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Inline comments are removed only when introduced after whitespace.
    fn strip_inline_comment_handles_hash_and_slashes() {
        assert_eq!(strip_inline_comment("rating   # default"), "rating");
        assert_eq!(strip_inline_comment("800 // ms"), "800");
        assert_eq!(strip_inline_comment("#fff"), "#fff");
        assert_eq!(strip_inline_comment("  high-low  "), "high-low");
    }

    #[test]
    /// What: Boolean parsing accepts the usual truthy spellings.
    fn parse_bool_accepts_truthy_spellings() {
        for v in ["true", "TRUE", "1", "yes", " on "] {
            assert!(parse_bool(v), "{v}");
        }
        for v in ["false", "0", "no", "off", ""] {
            assert!(!parse_bool(v), "{v}");
        }
        assert_eq!(normalize_key(" Search.Debounce-MS "), "search_debounce_ms");
    }
}
