//! Wire model for the subset of the Notion API this service consumes.
//!
//! These types mirror the JSON the store sends and accepts. They stay inside
//! the infrastructure layer; the mapper translates [`Page`] into the domain's
//! [`crate::domain::entities::Review`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One page (record) returned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub id: String,
    pub properties: HashMap<String, PropertyValue>,
}

/// Result envelope of a database query.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<Page>,
}

/// A property value, tagged by its `type` field.
///
/// Closed set of shapes this service reads. Property types outside the set
/// deserialize to [`PropertyValue::Other`], which the mapper treats the same
/// as an absent property.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title { title: Vec<RichText> },
    RichText { rich_text: Vec<RichText> },
    Url { url: Option<String> },
    Checkbox { checkbox: bool },
    Date { date: Option<DateValue> },
    CreatedTime { created_time: DateTime<Utc> },
    MultiSelect { multi_select: Vec<SelectOption> },
    #[serde(other)]
    Other,
}

/// One segment of a rich-text or title property.
#[derive(Debug, Clone, Deserialize)]
pub struct RichText {
    pub plain_text: String,
}

/// Payload of a date property. `start` is an ISO-8601 date or datetime string;
/// a range's `end` is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct DateValue {
    pub start: String,
}

/// One selected option of a multi-select property.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

/// Body of `POST /v1/databases/{id}/query`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<PropertyFilter>,
}

/// Sort specification: property name plus direction.
#[derive(Debug, Clone, Serialize)]
pub struct Sort {
    pub property: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Single-property query filter.
///
/// The store supports equality on text properties and containment on
/// multi-select properties; exactly one condition field is set per filter.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyFilter {
    pub property: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rich_text: Option<TextCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_select: Option<MultiSelectCondition>,
}

impl PropertyFilter {
    pub fn rich_text_equals(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            rich_text: Some(TextCondition {
                equals: value.into(),
            }),
            multi_select: None,
        }
    }

    pub fn multi_select_contains(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            rich_text: None,
            multi_select: Some(MultiSelectCondition {
                contains: value.into(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TextCondition {
    pub equals: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MultiSelectCondition {
    pub contains: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_title_property() {
        let value: PropertyValue = serde_json::from_value(json!({
            "type": "title",
            "title": [{ "plain_text": "Dune", "href": null }]
        }))
        .unwrap();

        match value {
            PropertyValue::Title { title } => assert_eq!(title[0].plain_text, "Dune"),
            other => panic!("expected title, got {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_unknown_property_type() {
        let value: PropertyValue = serde_json::from_value(json!({
            "type": "rollup",
            "rollup": { "number": 3 }
        }))
        .unwrap();

        assert!(matches!(value, PropertyValue::Other));
    }

    #[test]
    fn test_deserialize_empty_date() {
        let value: PropertyValue = serde_json::from_value(json!({
            "type": "date",
            "date": null
        }))
        .unwrap();

        assert!(matches!(value, PropertyValue::Date { date: None }));
    }

    #[test]
    fn test_serialize_query_with_containment_filter() {
        let request = QueryRequest {
            page_size: Some(10),
            sorts: vec![Sort {
                property: "Created time".to_string(),
                direction: SortDirection::Descending,
            }],
            filter: Some(PropertyFilter::multi_select_contains("Tag", "book")),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["page_size"], 10);
        assert_eq!(body["sorts"][0]["direction"], "descending");
        assert_eq!(body["filter"]["multi_select"]["contains"], "book");
        assert!(body["filter"].get("rich_text").is_none());
    }

    #[test]
    fn test_serialize_slug_equality_filter() {
        let request = QueryRequest {
            page_size: None,
            sorts: vec![],
            filter: Some(PropertyFilter::rich_text_equals("Slug", "dune-review")),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["filter"]["rich_text"]["equals"], "dune-review");
        assert!(body.get("page_size").is_none());
        assert!(body.get("sorts").is_none());
    }
}
