//! Notification handlers

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

use crate::state::AppState;

/// Notification routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_notifications))
        .route("/{id}/read", post(handler::mark_read))
}
