//! Review detail page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use super::current_year;
use crate::domain::entities::Review;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::htmx::HxRequest;

/// Full review detail page with the site shell.
#[derive(Template, WebTemplate)]
#[template(path = "review.html")]
pub struct ReviewPage {
    pub year: i32,
    pub review: Review,
}

/// Content-only fragment of the detail page, for htmx navigation.
#[derive(Template, WebTemplate)]
#[template(path = "review.html", block = "content")]
pub struct ReviewFragment {
    pub review: Review,
}

/// Renders one review looked up by slug.
///
/// # Endpoint
///
/// `GET /reviews/{slug}`
///
/// Unknown or unpublished slugs respond with 404; a store failure with 502.
pub async fn review_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    HxRequest(is_htmx): HxRequest,
) -> Result<Response, AppError> {
    let review = state.reviews.get_review_by_slug(&slug).await?;

    let response = if is_htmx {
        ReviewFragment { review }.into_response()
    } else {
        ReviewPage {
            year: current_year(),
            review,
        }
        .into_response()
    };

    Ok(response)
}
