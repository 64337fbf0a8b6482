//! Notion-backed implementation of the review repository.

use async_trait::async_trait;
use serde_json::json;

use crate::domain::entities::{Review, Tag};
use crate::domain::repositories::ReviewRepository;
use crate::error::AppError;
use crate::infrastructure::notion::mapper::page_to_review;
use crate::infrastructure::notion::models::{
    PropertyFilter, QueryRequest, Sort, SortDirection,
};
use crate::infrastructure::notion::{NotionClient, NotionError};

/// Property name carrying the store-managed creation timestamp, used as the
/// default sort key for listings.
const CREATED_TIME_PROPERTY: &str = "Created time";

/// Reads reviews from a single Notion database.
///
/// The store-side query narrows what gets transferred, but publish-only
/// visibility and multi-tag AND semantics are enforced here after mapping:
/// the store filter can only express containment of a single label, so the
/// first requested tag goes into the query and the rest are checked
/// post-fetch.
pub struct NotionReviewRepository {
    client: NotionClient,
    database_id: String,
}

impl NotionReviewRepository {
    pub fn new(client: NotionClient, database_id: impl Into<String>) -> Self {
        Self {
            client,
            database_id: database_id.into(),
        }
    }

    fn fetch_error(err: NotionError, context: &str) -> AppError {
        AppError::fetch_failed(context, json!({ "source": err.to_string() }))
    }
}

#[async_trait]
impl ReviewRepository for NotionReviewRepository {
    async fn list_reviews(&self, limit: u32, tags: &[Tag]) -> Result<Vec<Review>, AppError> {
        let request = QueryRequest {
            page_size: Some(limit),
            sorts: vec![Sort {
                property: CREATED_TIME_PROPERTY.to_string(),
                direction: SortDirection::Descending,
            }],
            filter: tags
                .first()
                .map(|tag| PropertyFilter::multi_select_contains("Tag", tag.as_str())),
        };

        tracing::debug!(limit, ?tags, "querying review database");
        let response = self
            .client
            .query_database(&self.database_id, &request)
            .await
            .map_err(|e| Self::fetch_error(e, "failed to query review database"))?;

        // Store order is preserved; no re-sort after filtering.
        let reviews = response
            .results
            .iter()
            .map(page_to_review)
            .filter(|review| review.published && review.has_all_tags(tags))
            .collect();

        Ok(reviews)
    }

    async fn get_review(&self, id: &str) -> Result<Review, AppError> {
        let page = self.client.get_page(id).await.map_err(|e| {
            if e.is_not_found() {
                AppError::not_found("review not found", json!({ "id": id }))
            } else {
                Self::fetch_error(e, "failed to get review page")
            }
        })?;

        let review = page_to_review(&page);
        if !review.published {
            // Unpublished reads the same as absent to callers.
            return Err(AppError::not_found("review not found", json!({ "id": id })));
        }

        Ok(review)
    }

    async fn get_review_by_slug(&self, slug: &str) -> Result<Review, AppError> {
        let request = QueryRequest {
            page_size: None,
            sorts: vec![],
            filter: Some(PropertyFilter::rich_text_equals("Slug", slug)),
        };

        let response = self
            .client
            .query_database(&self.database_id, &request)
            .await
            .map_err(|e| Self::fetch_error(e, "failed to query review database"))?;

        let page = response.results.first().ok_or_else(|| {
            AppError::not_found("review not found", json!({ "slug": slug }))
        })?;

        let review = page_to_review(page);
        if !review.published {
            return Err(AppError::not_found(
                "review not found",
                json!({ "slug": slug }),
            ));
        }

        Ok(review)
    }
}
