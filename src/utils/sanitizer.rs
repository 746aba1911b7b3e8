//! Input sanitization applied before anything is persisted.

use regex::Regex;
use std::sync::LazyLock;

/// Everything outside the alias alphabet `[A-Za-z0-9_-]`.
static ALIAS_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\-]").expect("valid alias regex"));

/// Everything outside printable ASCII (0x20..=0x7E).
static URL_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\x20-\x7E]+").expect("valid url regex"));

/// Strips every character that is not an ASCII letter, digit, `-` or `_`.
///
/// Returns an empty string when nothing survives; callers must reject that.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(sanitize_alias("my alias!"), "myalias");
/// assert_eq!(sanitize_alias("   "), "");
/// ```
pub fn sanitize_alias(input: &str) -> String {
    ALIAS_DISALLOWED.replace_all(input, "").into_owned()
}

/// Trims surrounding whitespace and strips non-printable / non-ASCII characters.
///
/// Does not validate the scheme or structure; that happens before sanitization.
pub fn sanitize_url(input: &str) -> String {
    URL_DISALLOWED.replace_all(input.trim(), "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_keeps_allowed_characters() {
        assert_eq!(sanitize_alias("My_Link-2025"), "My_Link-2025");
    }

    #[test]
    fn test_alias_strips_disallowed_characters() {
        assert_eq!(sanitize_alias("my link!@#$%"), "mylink");
        assert_eq!(sanitize_alias("promo/../admin"), "promoadmin");
        assert_eq!(sanitize_alias("caf\u{e9}"), "caf");
    }

    #[test]
    fn test_alias_empty_when_nothing_survives() {
        assert_eq!(sanitize_alias(""), "");
        assert_eq!(sanitize_alias("   "), "");
        assert_eq!(sanitize_alias("!!!"), "");
    }

    #[test]
    fn test_url_trims_whitespace() {
        assert_eq!(
            sanitize_url("  https://example.com/path \n"),
            "https://example.com/path"
        );
    }

    #[test]
    fn test_url_strips_control_and_non_ascii() {
        assert_eq!(
            sanitize_url("https://example.com/a\u{0007}b\u{00e9}c"),
            "https://example.com/abc"
        );
    }

    #[test]
    fn test_url_keeps_printable_ascii() {
        let url = "https://example.com/search?q=a+b&x=%20~";
        assert_eq!(sanitize_url(url), url);
    }

    #[test]
    fn test_url_keeps_inner_spaces() {
        assert_eq!(sanitize_url("https://example.com/a b"), "https://example.com/a b");
    }
}
