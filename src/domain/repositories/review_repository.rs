//! Repository trait for review data access.

use crate::domain::entities::{Review, Tag};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for reading reviews from the content store.
///
/// All read paths return only published reviews. An unpublished review is
/// indistinguishable from an absent one: both surface as
/// [`AppError::NotFound`] (or are silently dropped from listings).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::NotionReviewRepository`] - Notion API implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Lists up to `limit` published reviews, newest first by store creation time.
    ///
    /// When `tags` is non-empty, only reviews carrying every requested tag are
    /// returned (AND semantics). Store-returned order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::FetchFailed`] if the store query fails.
    async fn list_reviews(&self, limit: u32, tags: &[Tag]) -> Result<Vec<Review>, AppError>;

    /// Fetches a single review by its store identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the store has no such record or the
    /// record is not published. Returns [`AppError::FetchFailed`] on any other
    /// store failure.
    async fn get_review(&self, id: &str) -> Result<Review, AppError>;

    /// Looks up a review by its public slug.
    ///
    /// If multiple records share the slug, the first match wins.
    ///
    /// # Errors
    ///
    /// Same error contract as [`Self::get_review`].
    async fn get_review_by_slug(&self, slug: &str) -> Result<Review, AppError>;
}
