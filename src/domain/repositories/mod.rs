//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; the concrete implementation
//! against the Notion API lives in `crate::infrastructure::persistence`.
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod review_repository;

pub use review_repository::ReviewRepository;

#[cfg(test)]
pub use review_repository::MockReviewRepository;
