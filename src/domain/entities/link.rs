//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted short link.
///
/// `short_code` is assigned once at creation and never changes. `clicks` only
/// grows, driven by redirect traffic.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        clicks: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            clicks,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new link.
///
/// Both fields are already validated: the URL is normalized and the code is
/// freshly generated.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_code: String,
    pub original_url: String,
}

/// Administrative snapshot of the whole links table.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseDump {
    pub total_records: usize,
    pub urls: Vec<DumpEntry>,
}

/// One row of a [`DatabaseDump`].
#[derive(Debug, Clone, Serialize)]
pub struct DumpEntry {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for DumpEntry {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url,
            short_code: link.short_code,
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}

impl From<Vec<Link>> for DatabaseDump {
    fn from(links: Vec<Link>) -> Self {
        let urls: Vec<DumpEntry> = links.into_iter().map(DumpEntry::from).collect();
        Self {
            total_records: urls.len(),
            urls,
        }
    }
}
