//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. The only
//! entity of this service is [`Review`], together with its [`Tag`] labels.

pub mod review;

pub use review::{Review, Tag};
pub use review::{CUISINE_TAGS, TAG_ARTICLE, TAG_BOOK, TAG_FOOD};
