//! Host extraction from HTTP requests, used to build `short_url` values.

use axum::http::{HeaderMap, Uri, header};

/// Returns the host the client addressed, including the port if one was given.
///
/// Reads the `Host` header first and falls back to the authority of the request
/// URI (HTTP/2 requests carry it there). Yields an empty string when neither is
/// present or the header is not valid UTF-8, so callers still produce a
/// relative `"/{code}"` link.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8080".parse().unwrap());
///
/// assert_eq!(request_host(&headers, &Uri::from_static("/api/urls")), "sho.rt:8080");
/// ```
pub fn request_host(headers: &HeaderMap, uri: &Uri) -> String {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| uri.authority().map(|a| a.as_str().to_string()))
        .unwrap_or_default()
}
