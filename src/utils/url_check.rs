//! URL checks used by strict submission mode and base URL configuration.
//!
//! Submitted URLs are stored verbatim; these helpers only accept or reject.

use url::Url;

/// Errors returned when a string is not an acceptable absolute URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlCheckError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Checks that `input` is an absolute `http` or `https` URL with a host.
///
/// # Errors
///
/// Returns [`UrlCheckError::InvalidFormat`] for unparseable or relative input,
/// [`UrlCheckError::UnsupportedProtocol`] for other schemes such as
/// `javascript:` or `ftp:`, and [`UrlCheckError::MissingHost`] when the host
/// part is empty.
pub fn check_http_url(input: &str) -> Result<(), UrlCheckError> {
    let url = Url::parse(input).map_err(|e| UrlCheckError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlCheckError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlCheckError::MissingHost);
    }

    Ok(())
}

/// Validates a base URL and guarantees it ends with `/`, so tokens can be
/// appended directly.
///
/// ```ignore
/// assert_eq!(normalize_base_url("https://s.example.com").unwrap(), "https://s.example.com/");
/// ```
pub fn normalize_base_url(input: &str) -> Result<String, UrlCheckError> {
    let trimmed = input.trim();
    check_http_url(trimmed)?;

    if trimmed.ends_with('/') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{trimmed}/"))
    }
}
