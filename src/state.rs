use std::sync::Arc;

use crate::application::services::ReviewService;

/// Shared application state injected into every handler.
///
/// Immutable after startup; requests only read from it.
#[derive(Clone)]
pub struct AppState {
    pub reviews: Arc<ReviewService>,
}

impl AppState {
    pub fn new(reviews: Arc<ReviewService>) -> Self {
        Self { reviews }
    }
}
