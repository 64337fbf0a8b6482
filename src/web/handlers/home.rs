//! About page handler (site home).

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Response};

use super::current_year;
use crate::web::htmx::HxRequest;

/// Full about page with the site shell.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutPage {
    pub year: i32,
}

/// Content-only fragment of the about page, for htmx navigation.
#[derive(Template, WebTemplate)]
#[template(path = "about.html", block = "content")]
pub struct AboutFragment {}

/// Renders the about page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(HxRequest(is_htmx): HxRequest) -> Response {
    if is_htmx {
        AboutFragment {}.into_response()
    } else {
        AboutPage {
            year: current_year(),
        }
        .into_response()
    }
}
