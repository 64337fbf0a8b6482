//! Translation from store pages to the [`Review`] domain entity.

use chrono::NaiveDate;

use crate::domain::entities::{Review, Tag};

use super::models::{Page, PropertyValue, RichText};

/// Maps one store page to a [`Review`]. Pure, never fails.
///
/// Each named property is read as one expected shape. Absence or a shape
/// mismatch leaves the corresponding field at its zero value and moves on;
/// a record with a malformed property still renders, just with a blank
/// field. Only the page id is unconditional.
///
/// Unpublished pages are mapped too - the publish check belongs to the
/// repository, not here.
pub fn page_to_review(page: &Page) -> Review {
    let mut review = Review {
        id: page.id.clone(),
        title: String::new(),
        cover_image: None,
        slug: String::new(),
        description: String::new(),
        published: false,
        date: None,
        created_time: None,
        author: String::new(),
        tags: Vec::new(),
    };

    if let Some(PropertyValue::Title { title }) = page.properties.get("Title") {
        review.title = first_plain_text(title);
    }

    if let Some(PropertyValue::Url { url }) = page.properties.get("Cover Image") {
        review.cover_image = url.clone().filter(|u| !u.is_empty());
    }

    if let Some(PropertyValue::RichText { rich_text }) = page.properties.get("Slug") {
        review.slug = first_plain_text(rich_text);
    }

    if let Some(PropertyValue::RichText { rich_text }) = page.properties.get("Description") {
        review.description = first_plain_text(rich_text);
    }

    if let Some(PropertyValue::Checkbox { checkbox }) = page.properties.get("Published") {
        review.published = *checkbox;
    }

    if let Some(PropertyValue::Date { date: Some(date) }) = page.properties.get("Date") {
        review.date = parse_start_date(&date.start);
    }

    if let Some(PropertyValue::CreatedTime { created_time }) = page.properties.get("Created time") {
        review.created_time = Some(*created_time);
    }

    if let Some(PropertyValue::RichText { rich_text }) = page.properties.get("Author") {
        review.author = first_plain_text(rich_text);
    }

    if let Some(PropertyValue::MultiSelect { multi_select }) = page.properties.get("Tag") {
        review.tags = multi_select
            .iter()
            .map(|option| Tag::new(option.name.clone()))
            .collect();
    }

    review
}

fn first_plain_text(segments: &[RichText]) -> String {
    segments
        .first()
        .map(|segment| segment.plain_text.clone())
        .unwrap_or_default()
}

/// Parses the first 10 characters of a date start value as `YYYY-MM-DD`.
///
/// The store sends either a bare date or a full datetime; the 10-character
/// prefix covers both. Parse failures yield `None`, never an error.
fn parse_start_date(start: &str) -> Option<NaiveDate> {
    let prefix = start.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}
