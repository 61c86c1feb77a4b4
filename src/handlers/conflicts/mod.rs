//! Conflict detection and resolution handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::post};

use crate::state::AppState;

/// Conflict routes; detection and listing live under `/contests/{id}`
pub fn routes() -> Router<AppState> {
    Router::new().route("/{id}/resolve", post(handler::resolve_conflict))
}
