//! Handlers for link statistics and the administrative database dump.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::LinkStatsResponse;
use crate::domain::entities::DatabaseDump;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves click statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /api/urls/{code}/stats`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn link_stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LinkStatsResponse>, AppError> {
    let link = state.link_service.get_link_by_code(&code).await?;

    Ok(Json(link.into()))
}

/// Dumps every stored link.
///
/// # Endpoint
///
/// `GET /api/urls/db/contents`
///
/// # Response
///
/// ```json
/// { "total_records": 1, "urls": [ { "id": 1, "original_url": "...", ... } ] }
/// ```
pub async fn db_contents_handler(
    State(state): State<AppState>,
) -> Result<Json<DatabaseDump>, AppError> {
    let dump = state
        .link_service
        .dump_all()
        .await
        .map_err(|e| e.mask_internal("Failed to retrieve database contents"))?;

    Ok(Json(dump))
}
