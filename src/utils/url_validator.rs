//! Validation of user-supplied target URLs.
//!
//! Only absolute `http`/`https` URLs are accepted as redirect targets.

use url::Url;

/// Reasons a candidate URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Parses `input` as an absolute URL and enforces an `http`/`https` scheme.
///
/// Rejects relative references and potentially dangerous schemes like
/// `javascript:`, `data:` or `file:`.
///
/// # Examples
///
/// ```ignore
/// assert!(parse_http_url("https://example.com/path").is_ok());
/// assert!(parse_http_url("notaurl").is_err());
/// assert!(parse_http_url("ftp://example.com").is_err());
/// ```
pub fn parse_http_url(input: &str) -> Result<Url, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::InvalidFormat(
            "URL has no host".to_string(),
        ));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http() {
        let url = parse_http_url("http://example.com").unwrap();
        assert_eq!(url.as_str(), "http://example.com/");
    }

    #[test]
    fn test_accepts_https_with_path_and_query() {
        let url = parse_http_url("https://example.com/search?q=rust&lang=en").unwrap();
        assert_eq!(url.as_str(), "https://example.com/search?q=rust&lang=en");
    }

    #[test]
    fn test_lowercases_scheme_and_host() {
        let url = parse_http_url("HTTPS://EXAMPLE.COM/Path").unwrap();
        assert_eq!(url.as_str(), "https://example.com/Path");
    }

    #[test]
    fn test_keeps_custom_port() {
        let url = parse_http_url("http://localhost:8080/api").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api");
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(parse_http_url(""), Err(UrlValidationError::Empty)));
        assert!(matches!(parse_http_url("   "), Err(UrlValidationError::Empty)));
    }

    #[test]
    fn test_rejects_relative() {
        assert!(matches!(
            parse_http_url("notaurl"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_http_url("example.com/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_other_schemes() {
        for input in [
            "ftp://example.com/file.txt",
            "file:///etc/passwd",
            "javascript:alert('xss')",
            "mailto:test@example.com",
            "data:text/plain,Hello",
        ] {
            assert!(
                matches!(parse_http_url(input), Err(UrlValidationError::UnsupportedProtocol)),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_percent_encodes_non_ascii_path() {
        let url = parse_http_url("https://example.com/caf\u{e9}").unwrap();
        assert!(url.as_str().is_ascii());
    }
}
