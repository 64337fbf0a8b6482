//! Site route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    articles_handler, books_handler, food_handler, home_handler, review_handler,
};
use axum::{routing::get, Router};

/// Page routes.
///
/// # Endpoints
///
/// - `GET /` - about page
/// - `GET /books` - book review listing
/// - `GET /articles` - article review listing
/// - `GET /food` - food review listing with optional `?cuisine=` filter
/// - `GET /reviews/{slug}` - single review by slug
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/books", get(books_handler))
        .route("/articles", get(articles_handler))
        .route("/food", get(food_handler))
        .route("/reviews/{slug}", get(review_handler))
}
