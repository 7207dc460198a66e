//! # Link Shortener
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entity and the repository trait
//! - **Application Layer** ([`application`]) - URL validation, code assignment, click counting
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations and repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs and request tracing
//! - **Web Layer** ([`web`]) - Landing page
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://links.db?mode=rwc"  # Optional
//! cargo run
//!
//! curl -X POST localhost:8080/api/urls -H 'content-type: application/json' \
//!      -d '{"url":"openai.com"}'
//! ```
//!
//! Migrations are embedded and applied at startup. The `admin` binary works
//! on the same database from the command line.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{DatabaseDump, Link, NewLink};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteLinkRepository;
    pub use crate::state::AppState;
}
