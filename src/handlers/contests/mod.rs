//! Contest handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers::conflicts, state::AppState};

/// Contest routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_contests).post(handler::create_contest))
        .route("/{id}", get(handler::get_contest))
        .route("/{id}/review", post(handler::review_contest))
        // Conflict detection
        .route("/{id}/detect-conflicts", post(conflicts::detect_conflicts))
        .route("/{id}/conflicts", get(conflicts::list_conflicts))
}
