//! Destination URL validation.
//!
//! Only absolute `http`/`https` URLs with a non-empty host are accepted. The
//! submitted string is stored verbatim; [`location_for`] turns it into the
//! ASCII form sent in a `Location` header.

use std::borrow::Cow;

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("URL contains whitespace or control characters")]
    IllegalCharacters,

    #[error("Invalid URL format: {0}")]
    Malformed(String),

    #[error("Only HTTP and HTTPS URLs are allowed, got '{0}'")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,
}

/// Validates a destination URL.
///
/// # Rules
///
/// 1. Must not be empty
/// 2. Must not contain whitespace or control characters
/// 3. Must parse as an absolute URL
/// 4. Scheme must be `http` or `https`, written with `://`
/// 5. Host must be non-empty
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/path?q=1").is_ok());
/// assert!(validate_url("example.com").is_err());        // relative
/// assert!(validate_url("ftp://example.com").is_err());  // scheme
/// assert!(validate_url("http://").is_err());            // no host
/// ```
pub fn validate_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(UrlValidationError::IllegalCharacters);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::Malformed(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::UnsupportedScheme(other.to_string())),
    }

    // The URL standard repairs `http:example.com` into an absolute URL; the
    // authority marker must be present in what the user actually typed.
    if !input[url.scheme().len()..].starts_with("://") {
        return Err(UrlValidationError::MissingHost);
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlValidationError::MissingHost),
    }
}

/// Returns the ASCII form of a stored destination URL for a `Location` header.
///
/// ASCII input is returned unchanged. Anything else is re-serialized by the
/// URL parser, which punycodes the host and percent-encodes path, query and
/// fragment.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(location_for("https://example.com/a").unwrap(), "https://example.com/a");
/// assert_eq!(location_for("https://bücher.de/").unwrap(), "https://xn--bcher-kva.de/");
/// ```
pub fn location_for(stored: &str) -> Result<Cow<'_, str>, UrlValidationError> {
    if stored.is_ascii() {
        return Ok(Cow::Borrowed(stored));
    }

    validate_url(stored).map(|url| Cow::Owned(String::from(url)))
}
