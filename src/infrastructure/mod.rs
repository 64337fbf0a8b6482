//! Infrastructure layer: external store integration.
//!
//! - [`notion`] - Notion API wire model, HTTP client, page-to-domain mapper
//! - [`persistence`] - repository implementations built on the client

pub mod notion;
pub mod persistence;
