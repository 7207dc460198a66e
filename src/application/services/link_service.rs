//! Link creation, lookup, mutation and click counting.

use std::sync::Arc;

use crate::domain::entities::{DatabaseDump, Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::validate_url;

/// Service owning every business rule of the shortener.
///
/// Validates and canonicalizes URLs, assigns short codes, and forwards CRUD
/// and click-count operations to the repository. It never retries: every
/// failure is returned to the caller as an [`AppError`].
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link for `raw_url`.
    ///
    /// # Code Generation
    ///
    /// A fresh random 8-character code is assigned before insert. Existing codes
    /// are not consulted; a collision is reported by the store's unique index.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is invalid.
    /// Returns [`AppError::Internal`] on store failures, including duplicate codes.
    pub async fn create_link(&self, raw_url: &str) -> Result<Link, AppError> {
        let original_url = validate_url(raw_url)?;

        let short_code = generate_code();

        let link = self
            .link_repository
            .insert(NewLink {
                short_code,
                original_url,
            })
            .await?;

        tracing::info!(
            short_code = %link.short_code,
            original_url = %link.original_url,
            "Short link created"
        );

        Ok(link)
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(AppError::url_not_found)
    }

    /// Lists every link, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_all().await
    }

    /// Points an existing link at a new destination.
    ///
    /// The short code is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the new URL is invalid.
    /// Returns [`AppError::NotFound`] if the link was deleted meanwhile.
    pub async fn update_link(&self, link: Link, raw_url: &str) -> Result<Link, AppError> {
        let original_url = validate_url(raw_url)?;

        let link = Link {
            original_url,
            ..link
        };
        let saved = self.link_repository.save(&link).await?;

        tracing::info!(
            short_code = %saved.short_code,
            original_url = %saved.original_url,
            "Short link updated"
        );

        Ok(saved)
    }

    /// Records one visit of `link` and returns the updated record.
    ///
    /// The increment happens inside the store in a single statement, so
    /// concurrent redirects for the same code all count.
    pub async fn increment_clicks(&self, link: &Link) -> Result<Link, AppError> {
        self.link_repository.increment_clicks(link).await
    }

    /// Deletes a link permanently.
    pub async fn delete_link(&self, link: &Link) -> Result<(), AppError> {
        self.link_repository.delete(link).await?;

        tracing::info!(short_code = %link.short_code, "Short link deleted");

        Ok(())
    }

    /// Returns every stored link in the administrative dump format.
    pub async fn dump_all(&self) -> Result<DatabaseDump, AppError> {
        let links = self.link_repository.list_all().await?;
        Ok(DatabaseDump::from(links))
    }

    /// Counts stored links.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Constructs the short URL handed back to API clients.
    ///
    /// `host` is the host the request was addressed to, port included.
    pub fn short_url(&self, host: &str, code: &str) -> String {
        format!("{}/{}", host.trim_end_matches('/'), code)
    }
}
