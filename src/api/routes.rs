//! API route configuration.
//!
//! Mounted under `/api/urls` by [`crate::routes::app_router`].

use crate::api::handlers::{
    create_link_handler, db_contents_handler, delete_link_handler, get_link_handler,
    link_stats_handler, list_links_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Link management routes.
///
/// # Endpoints
///
/// - `GET    /`             - List all links, newest first
/// - `POST   /`             - Create a short link
/// - `GET    /db/contents`  - Dump every stored link
/// - `GET    /{code}`       - Fetch one link
/// - `PUT    /{code}`       - Change the destination of a link
/// - `DELETE /{code}`       - Delete a link
/// - `GET    /{code}/stats` - Click statistics for a link
///
/// The static `/db/contents` segment takes priority over `/{code}/stats`.
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_links_handler).post(create_link_handler))
        .route("/db/contents", get(db_contents_handler))
        .route(
            "/{code}",
            get(get_link_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
        .route("/{code}/stats", get(link_stats_handler))
}
