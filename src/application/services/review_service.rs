//! Review listing and lookup service.

use std::sync::Arc;

use crate::domain::entities::{Review, Tag};
use crate::domain::repositories::ReviewRepository;
use crate::error::AppError;

/// Listing page size used when the caller passes no positive limit.
pub const DEFAULT_LIMIT: u32 = 10;

/// Thin policy layer in front of the repository.
///
/// Normalizes the listing limit before delegating; lookups pass through
/// unchanged. Holds the repository behind `dyn` so handlers and tests can
/// swap implementations.
pub struct ReviewService {
    repository: Arc<dyn ReviewRepository>,
}

impl ReviewService {
    pub fn new(repository: Arc<dyn ReviewRepository>) -> Self {
        Self { repository }
    }

    /// Lists published reviews, newest first.
    ///
    /// A `limit` of zero is clamped to [`DEFAULT_LIMIT`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::FetchFailed`] if the store query fails.
    pub async fn list_reviews(&self, limit: u32, tags: &[Tag]) -> Result<Vec<Review>, AppError> {
        let limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
        self.repository.list_reviews(limit, tags).await
    }

    /// Fetches one published review by store id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for absent or unpublished records,
    /// [`AppError::FetchFailed`] on store failures.
    pub async fn get_review(&self, id: &str) -> Result<Review, AppError> {
        self.repository.get_review(id).await
    }

    /// Looks up one published review by slug.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::get_review`].
    pub async fn get_review_by_slug(&self, slug: &str) -> Result<Review, AppError> {
        self.repository.get_review_by_slug(slug).await
    }
}
