//! Listing page handlers for the three review categories.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use super::current_year;
use crate::application::services::DEFAULT_LIMIT;
use crate::domain::entities::{Review, Tag, CUISINE_TAGS, TAG_ARTICLE, TAG_BOOK, TAG_FOOD};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::htmx::HxRequest;

/// One cuisine filter pill on the food page.
pub struct CuisinePill {
    pub name: &'static str,
    pub active: bool,
}

/// Full listing page with the site shell.
#[derive(Template, WebTemplate)]
#[template(path = "reviews.html")]
pub struct ListingPage {
    pub year: i32,
    pub kind: String,
    pub cuisines: Vec<CuisinePill>,
    pub reviews: Vec<Review>,
}

/// Content-only fragment of a listing, for htmx navigation.
#[derive(Template, WebTemplate)]
#[template(path = "reviews.html", block = "content")]
pub struct ListingFragment {
    pub kind: String,
    pub cuisines: Vec<CuisinePill>,
    pub reviews: Vec<Review>,
}

fn render_listing(
    is_htmx: bool,
    kind: &str,
    cuisines: Vec<CuisinePill>,
    reviews: Vec<Review>,
) -> Response {
    if is_htmx {
        ListingFragment {
            kind: kind.to_string(),
            cuisines,
            reviews,
        }
        .into_response()
    } else {
        ListingPage {
            year: current_year(),
            kind: kind.to_string(),
            cuisines,
            reviews,
        }
        .into_response()
    }
}

/// Renders the book review listing.
///
/// # Endpoint
///
/// `GET /books`
pub async fn books_handler(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
) -> Result<Response, AppError> {
    let reviews = state
        .reviews
        .list_reviews(DEFAULT_LIMIT, &[Tag::from(TAG_BOOK)])
        .await?;

    tracing::debug!(count = reviews.len(), "fetched book reviews");
    Ok(render_listing(is_htmx, "Book", vec![], reviews))
}

/// Renders the article review listing.
///
/// # Endpoint
///
/// `GET /articles`
pub async fn articles_handler(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
) -> Result<Response, AppError> {
    let reviews = state
        .reviews
        .list_reviews(DEFAULT_LIMIT, &[Tag::from(TAG_ARTICLE)])
        .await?;

    tracing::debug!(count = reviews.len(), "fetched article reviews");
    Ok(render_listing(is_htmx, "Article", vec![], reviews))
}

#[derive(Debug, Deserialize)]
pub struct FoodParams {
    pub cuisine: Option<String>,
}

/// Renders the food review listing with an optional cuisine sub-filter.
///
/// The cuisine tag is required in addition to `food`: a review must carry
/// both to appear.
///
/// # Endpoint
///
/// `GET /food?cuisine={name}`
pub async fn food_handler(
    State(state): State<AppState>,
    Query(params): Query<FoodParams>,
    HxRequest(is_htmx): HxRequest,
) -> Result<Response, AppError> {
    let cuisine = params.cuisine.filter(|c| !c.is_empty());

    let mut tags = vec![Tag::from(TAG_FOOD)];
    if let Some(name) = &cuisine {
        tags.push(Tag::new(name.clone()));
    }

    let reviews = state.reviews.list_reviews(DEFAULT_LIMIT, &tags).await?;

    let cuisines = CUISINE_TAGS
        .iter()
        .copied()
        .map(|name| CuisinePill {
            name,
            active: cuisine.as_deref() == Some(name),
        })
        .collect();

    tracing::debug!(count = reviews.len(), ?cuisine, "fetched food reviews");
    Ok(render_listing(is_htmx, "Food", cuisines, reviews))
}
