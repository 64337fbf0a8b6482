//! Concrete repository implementations over the content store.

pub mod notion_review_repository;

pub use notion_review_repository::NotionReviewRepository;
