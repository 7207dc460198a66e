//! Validation and canonicalization of user-supplied URLs.
//!
//! Input without an `http://` or `https://` prefix is treated as an HTTPS URL.
//! The stored value is always re-serialized from its parsed components, so the
//! host is lower-cased, default ports are dropped and escaping is normalized.

use url::{ParseError, Position, Url};

/// Errors that can occur during URL validation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("invalid URL provided")]
    Empty,

    #[error("invalid URL provided")]
    Malformed(ParseError),

    #[error("invalid URL: missing host")]
    MissingHost,
}

/// Validates `raw` and returns its canonical form.
///
/// # Rules
///
/// 1. Surrounding whitespace is ignored
/// 2. `https://` is prepended unless the input already starts with `http://` or
///    `https://` (case-insensitive)
/// 3. The result must parse as an absolute URL with a non-empty host
/// 4. A bare host keeps no trailing slash (`openai.com` -> `https://openai.com`)
///
/// # Errors
///
/// Returns [`UrlValidationError::MissingHost`] for input such as `https://`.
/// Returns [`UrlValidationError::Malformed`] for anything the parser rejects.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_url("openai.com").unwrap(), "https://openai.com");
/// assert_eq!(
///     validate_url("HTTP://Example.COM:80/a b").unwrap(),
///     "http://example.com/a%20b"
/// );
/// ```
pub fn validate_url(raw: &str) -> Result<String, UrlValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let candidate = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    if authority(&candidate).is_empty() {
        return Err(UrlValidationError::MissingHost);
    }

    let url = Url::parse(&candidate).map_err(|e| match e {
        ParseError::EmptyHost => UrlValidationError::MissingHost,
        other => UrlValidationError::Malformed(other),
    })?;

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    if url.path() == "/" && !has_explicit_path(&candidate) {
        return Ok(format!(
            "{}{}",
            &url[..Position::AfterPort],
            &url[Position::AfterPath..]
        ));
    }

    Ok(url.into())
}

fn has_http_scheme(input: &str) -> bool {
    let lower = input
        .get(..8)
        .unwrap_or(input)
        .to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Text between `://` and the first `/`, `\`, `?` or `#`.
///
/// Checked before parsing, since the parser would otherwise promote the first
/// path segment of `https:///path` to the host.
fn authority(input: &str) -> &str {
    let after_scheme = input.find("://").map_or(input, |i| &input[i + 3..]);
    let end = after_scheme
        .find(['/', '\\', '?', '#'])
        .unwrap_or(after_scheme.len());

    &after_scheme[..end]
}

/// Whether the authority in `input` is followed by a path, rather than by a
/// query, a fragment or nothing at all.
fn has_explicit_path(input: &str) -> bool {
    let after_scheme = input.find("://").map_or(input, |i| &input[i + 3..]);

    matches!(
        after_scheme.as_bytes().get(authority(input).len()),
        Some(b'/' | b'\\')
    )
}
