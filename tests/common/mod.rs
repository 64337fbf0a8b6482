#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::NaiveDate;
use review_site::prelude::*;
use serde_json::json;
use std::sync::Arc;

/// In-memory repository standing in for the Notion-backed one.
///
/// Mirrors the repository contract: only published reviews escape, tag
/// filtering is AND, lookups on missing or unpublished records are NotFound.
pub struct StubReviewRepository {
    pub reviews: Vec<Review>,
    pub fail: bool,
}

#[async_trait]
impl ReviewRepository for StubReviewRepository {
    async fn list_reviews(&self, limit: u32, tags: &[Tag]) -> Result<Vec<Review>, AppError> {
        if self.fail {
            return Err(AppError::fetch_failed("failed to query review database", json!({})));
        }

        Ok(self
            .reviews
            .iter()
            .filter(|r| r.published && r.has_all_tags(tags))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn get_review(&self, id: &str) -> Result<Review, AppError> {
        if self.fail {
            return Err(AppError::fetch_failed("failed to get review page", json!({})));
        }

        self.reviews
            .iter()
            .find(|r| r.id == id && r.published)
            .cloned()
            .ok_or_else(|| AppError::not_found("review not found", json!({ "id": id })))
    }

    async fn get_review_by_slug(&self, slug: &str) -> Result<Review, AppError> {
        if self.fail {
            return Err(AppError::fetch_failed("failed to query review database", json!({})));
        }

        self.reviews
            .iter()
            .find(|r| r.slug == slug && r.published)
            .cloned()
            .ok_or_else(|| AppError::not_found("review not found", json!({ "slug": slug })))
    }
}

pub fn make_review(slug: &str, title: &str, tags: &[&str], published: bool) -> Review {
    Review {
        id: format!("id-{slug}"),
        title: title.to_string(),
        cover_image: None,
        slug: slug.to_string(),
        description: format!("About {title}."),
        published,
        date: NaiveDate::from_ymd_opt(2024, 3, 1),
        created_time: None,
        author: "Tester".to_string(),
        tags: tags.iter().map(|t| Tag::from(*t)).collect(),
    }
}

pub fn test_state(reviews: Vec<Review>, fail: bool) -> AppState {
    let repository = Arc::new(StubReviewRepository { reviews, fail });
    AppState::new(Arc::new(ReviewService::new(repository)))
}

pub fn test_server(state: AppState) -> TestServer {
    let app = review_site::web::routes::routes().with_state(state);
    TestServer::new(app).unwrap()
}
