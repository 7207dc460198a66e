//! Shared application state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Link service backed by the SQLite repository.
pub type AppLinkService = LinkService<SqliteLinkRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
}

impl AppState {
    /// Wires repository and service on top of an existing pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        let link_repository = Arc::new(SqliteLinkRepository::new(pool));
        let link_service = Arc::new(LinkService::new(link_repository));

        Self { link_service }
    }
}
