//! Handlers for link management endpoints (list, create, read, update, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, Uri},
};
use validator::Validate;

use crate::api::dto::link::{CreateLinkResponse, LinkResponse, UrlRequest};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_host::request_host;

/// Pulls the `url` field out of a request body.
///
/// Malformed JSON, a wrong content type, a missing field and an empty string
/// all collapse into the same `URL is required` error.
fn required_url(payload: Result<Json<UrlRequest>, JsonRejection>) -> Result<String, AppError> {
    let Json(request) = payload.map_err(|_| AppError::url_required())?;
    request.validate().map_err(|_| AppError::url_required())?;
    request.url.ok_or_else(AppError::url_required)
}

/// Lists every stored link, newest first.
///
/// # Endpoint
///
/// `GET /api/urls`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state
        .link_service
        .list_links()
        .await
        .map_err(|e| e.mask_internal("Failed to retrieve URLs"))?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/urls`
///
/// # Request Body
///
/// ```json
/// { "url": "openai.com" }
/// ```
///
/// # Response
///
/// 201 Created with `short_url`, `original_url` and `short_code`. The short URL
/// is built from the `Host` the client used.
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing or invalid.
/// Returns 500 Internal Server Error if the link cannot be stored.
pub async fn create_link_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    let url = required_url(payload)?;

    let link = state
        .link_service
        .create_link(&url)
        .await
        .map_err(|e| e.mask_internal("Failed to create short URL"))?;

    let host = request_host(&headers, &uri);
    let short_url = state.link_service.short_url(&host, &link.short_code);

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            short_url,
            original_url: link.original_url,
            short_code: link.short_code,
        }),
    ))
}

/// Returns a single link.
///
/// # Endpoint
///
/// `GET /api/urls/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn get_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link_by_code(&code).await?;

    Ok(Json(link.into()))
}

/// Points an existing short code at a new URL.
///
/// # Endpoint
///
/// `PUT /api/urls/{code}`
///
/// The code is looked up before the body is inspected, so an unknown code is
/// a 404 even when the body is also wrong.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 400 Bad Request if `url` is missing or invalid.
/// Returns 500 Internal Server Error if the update cannot be stored.
pub async fn update_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link_by_code(&code).await?;

    let url = required_url(payload)?;

    let updated = state
        .link_service
        .update_link(link, &url)
        .await
        .map_err(|e| e.mask_internal("Failed to update URL"))?;

    Ok(Json(updated.into()))
}

/// Deletes a short link.
///
/// # Endpoint
///
/// `DELETE /api/urls/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error if the delete fails.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, AppError> {
    let link = state.link_service.get_link_by_code(&code).await?;

    state
        .link_service
        .delete_link(&link)
        .await
        .map_err(|e| e.mask_internal("Failed to delete URL"))?;

    Ok(StatusCode::NO_CONTENT)
}
