//! Application services orchestrating domain operations.

pub mod review_service;

pub use review_service::{ReviewService, DEFAULT_LIMIT};
