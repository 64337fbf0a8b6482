//! Review entity representing one published (or draft) review page.

use chrono::{DateTime, NaiveDate, Utc};

/// Known category labels. Free-form tags beyond these are allowed.
pub const TAG_BOOK: &str = "book";
pub const TAG_ARTICLE: &str = "article";
pub const TAG_FOOD: &str = "food";

/// Cuisine sub-tags offered as filters on the food listing page.
pub const CUISINE_TAGS: [&str; 5] = ["thai", "italian", "japanese", "chinese", "indian"];

/// A category label on a review.
///
/// Tags are plain strings in the content store's multi-select property.
/// A few labels ([`TAG_BOOK`], [`TAG_ARTICLE`], [`TAG_FOOD`], [`CUISINE_TAGS`])
/// carry meaning for the site's navigation; everything else is free-form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A review sourced from the external content store.
///
/// Immutable value object, built fresh on every request. Every field except
/// `id` is optional at the source: a missing or malformed store property
/// leaves the field at its zero value rather than failing the whole record.
#[derive(Debug, Clone)]
pub struct Review {
    /// Opaque store-assigned page identifier. Always present.
    pub id: String,
    pub title: String,
    pub cover_image: Option<String>,
    /// Public lookup key. Uniqueness is the store's responsibility.
    pub slug: String,
    pub description: String,
    /// Visibility flag. Unset or malformed in the store means not published.
    pub published: bool,
    /// Editorial date, distinct from `created_time`.
    pub date: Option<NaiveDate>,
    /// Store-managed creation timestamp, used for default sort order.
    pub created_time: Option<DateTime<Utc>>,
    pub author: String,
    /// Store order preserved, duplicates not deduplicated.
    pub tags: Vec<Tag>,
}

impl Review {
    /// Returns true if every tag in `required` appears in this review's tag set.
    ///
    /// An empty `required` slice matches every review.
    pub fn has_all_tags(&self, required: &[Tag]) -> bool {
        required.iter().all(|t| self.tags.contains(t))
    }
}
