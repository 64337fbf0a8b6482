//! Web layer: server-side rendered pages with htmx partial navigation.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`htmx`] - `HX-Request` detection extractor
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod htmx;
pub mod routes;
