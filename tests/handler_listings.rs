mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};

fn hx_header() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("hx-request"),
        HeaderValue::from_static("true"),
    )
}

#[tokio::test]
async fn test_books_page_renders_shell() {
    let state = common::test_state(
        vec![common::make_review("dune-review", "Dune", &["book"], true)],
        false,
    );
    let server = common::test_server(state);

    let response = server.get("/books").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<html"));
    assert!(html.contains("Book Reviews"));
    assert!(html.contains("Dune"));
    assert!(html.contains("/reviews/dune-review"));
}

#[tokio::test]
async fn test_books_htmx_request_gets_fragment() {
    let state = common::test_state(
        vec![common::make_review("dune-review", "Dune", &["book"], true)],
        false,
    );
    let server = common::test_server(state);

    let (name, value) = hx_header();
    let response = server.get("/books").add_header(name, value).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(!html.contains("<html"));
    assert!(html.contains("Dune"));
}

#[tokio::test]
async fn test_listing_excludes_other_categories() {
    let state = common::test_state(
        vec![
            common::make_review("dune-review", "Dune", &["book"], true),
            common::make_review("pad-thai", "Pad Thai", &["food", "thai"], true),
        ],
        false,
    );
    let server = common::test_server(state);

    let response = server.get("/articles").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("No reviews here yet."));
    assert!(!html.contains("Dune"));
}

#[tokio::test]
async fn test_food_cuisine_filter_requires_both_tags() {
    let state = common::test_state(
        vec![
            common::make_review("pad-thai", "Pad Thai", &["food", "thai"], true),
            common::make_review("carbonara", "Carbonara", &["food", "italian"], true),
        ],
        false,
    );
    let server = common::test_server(state);

    let response = server.get("/food?cuisine=thai").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Pad Thai"));
    assert!(!html.contains("Carbonara"));
}

#[tokio::test]
async fn test_food_page_shows_cuisine_pills() {
    let state = common::test_state(vec![], false);
    let server = common::test_server(state);

    let response = server.get("/food").await;

    response.assert_status_ok();
    let html = response.text();
    for cuisine in ["Thai", "Italian", "Japanese", "Chinese", "Indian"] {
        assert!(html.contains(cuisine), "missing cuisine pill: {cuisine}");
    }
}

#[tokio::test]
async fn test_empty_cuisine_param_lists_all_food() {
    let state = common::test_state(
        vec![common::make_review("pad-thai", "Pad Thai", &["food", "thai"], true)],
        false,
    );
    let server = common::test_server(state);

    let response = server.get("/food?cuisine=").await;

    response.assert_status_ok();
    assert!(response.text().contains("Pad Thai"));
}

#[tokio::test]
async fn test_fetch_failure_returns_bad_gateway() {
    let state = common::test_state(vec![], true);
    let server = common::test_server(state);

    let response = server.get("/books").await;

    response.assert_status(StatusCode::BAD_GATEWAY);
}
