//! Notion API integration: wire model, HTTP client, and domain mapper.

pub mod client;
pub mod mapper;
pub mod models;

pub use client::{NotionClient, NotionError};
