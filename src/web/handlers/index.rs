//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the landing page.
///
/// The form talks to `POST /api/urls` from the browser; the page itself is
/// static apart from the API prefix.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub api_base: &'a str,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {
        api_base: "/api/urls",
    }
}
