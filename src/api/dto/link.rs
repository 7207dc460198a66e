//! DTOs for the link CRUD endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request body for `POST /api/urls` and `PUT /api/urls/{code}`.
///
/// `url` is optional at the serde level so that a missing field and an empty
/// string are both reported as `URL is required` by validation.
#[derive(Debug, Deserialize, Validate)]
pub struct UrlRequest {
    #[validate(required, length(min = 1))]
    pub url: Option<String>,
}

/// Response for a freshly created short link.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub short_url: String,
    pub original_url: String,
    pub short_code: String,
}

/// Full JSON representation of a stored link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url,
            short_code: link.short_code,
            clicks: link.clicks,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

/// Click statistics for a single link.
#[derive(Debug, Serialize)]
pub struct LinkStatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkStatsResponse {
    fn from(link: Link) -> Self {
        Self {
            short_code: link.short_code,
            original_url: link.original_url,
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}
