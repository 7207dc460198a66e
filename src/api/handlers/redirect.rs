//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the link by code
/// 2. Count the click in the store
/// 3. Return 302 Found with `Location` set to the original URL
///
/// The click is recorded before responding. If recording fails the client gets
/// a 500 and no redirect.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error if the click count cannot be updated.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.get_link_by_code(&code).await?;

    // A link deleted since the lookup comes back as NotFound and stays a 404.
    let link = state
        .link_service
        .increment_clicks(&link)
        .await
        .map_err(|e| e.mask_internal("Failed to update click count"))?;

    tracing::debug!(short_code = %link.short_code, clicks = link.clicks, "Redirecting");

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, link.original_url)],
    ))
}
