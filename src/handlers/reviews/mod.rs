//! Contest review handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Review routes; submitting a review lives under `/contests/{id}/review`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_reviews))
        .route("/stats", get(handler::review_stats))
}
