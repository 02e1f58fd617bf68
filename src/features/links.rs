//! Opening external links in the user's browser

/// Errors from opening a link
#[derive(Debug)]
pub enum LinkError {
    /// Only http and https links are handed to the platform
    UnsupportedScheme(String),
    Open(std::io::Error),
}

impl std::fmt::Display for LinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkError::UnsupportedScheme(url) => write!(f, "Refusing to open {}", url),
            LinkError::Open(e) => write!(f, "Failed to open link: {}", e),
        }
    }
}

impl std::error::Error for LinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LinkError::Open(e) => Some(e),
            LinkError::UnsupportedScheme(_) => None,
        }
    }
}

/// Check that a link is a web URL
pub fn validate(url: &str) -> Result<&str, LinkError> {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() => Ok(trimmed),
        _ => Err(LinkError::UnsupportedScheme(url.to_string())),
    }
}

/// Open a web URL with the platform's default handler
pub fn open_url(url: &str) -> Result<(), LinkError> {
    let url = validate(url)?;
    tracing::info!("Opening URL in browser: {}", url);
    open::that(url).map_err(LinkError::Open)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_web_urls() {
        assert!(validate("https://github.com/whitescent").is_ok());
        assert!(validate("HTTP://example.com").is_ok());
        assert_eq!(
            validate("  https://soundcloud.com/x ").unwrap(),
            "https://soundcloud.com/x"
        );
    }

    #[test]
    fn test_rejects_other_schemes() {
        for url in ["file:///etc/passwd", "javascript:alert(1)", "https://", "github.com"] {
            assert!(
                matches!(validate(url), Err(LinkError::UnsupportedScheme(_))),
                "{url}"
            );
        }
    }

    #[test]
    fn test_open_rejects_before_spawning() {
        assert!(matches!(open_url("ftp://example.com"), Err(LinkError::UnsupportedScheme(_))));
    }
}
