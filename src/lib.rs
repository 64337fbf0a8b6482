//! # Review Site
//!
//! A server-rendered review-listing site backed by a Notion database,
//! built with Axum and Askama.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The `Review` entity and repository trait
//! - **Application Layer** ([`application`]) - Listing/lookup policy
//! - **Infrastructure Layer** ([`infrastructure`]) - Notion API client, wire
//!   model, and page-to-domain mapper
//! - **Web Layer** ([`web`]) - HTML pages with htmx partial navigation
//!
//! ## Features
//!
//! - Tolerant mapping: a missing or malformed store property blanks one
//!   field instead of failing the record
//! - Publish-only visibility enforced at the repository boundary
//! - Tag filtering with AND semantics (category plus cuisine sub-tag)
//! - Fragment responses for `HX-Request` navigation
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export NOTION_API_KEY="secret_..."
//! export NOTION_DATABASE_ID="..."
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

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
    pub use crate::application::services::{ReviewService, DEFAULT_LIMIT};
    pub use crate::domain::entities::{Review, Tag};
    pub use crate::domain::repositories::ReviewRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
