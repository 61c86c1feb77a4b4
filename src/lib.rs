//! Contest Review - Competition Registration and Review Backend
//!
//! This library provides the core functionality for a contest review service:
//! contest registration with venues, reviewer approval, and detection of
//! schedule and venue conflicts between contests.
//!
//! # Features
//!
//! - Contest creation with venue bookings
//! - Conflict detection on overlapping schedules and shared venues
//! - Conflict resolution with retained history
//! - Review workflow with status changes and notifications
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Detection**: Pure conflict matching
//! - **Repositories**: Database access
//! - **Models**: Domain models

pub mod config;
pub mod constants;
pub mod db;
pub mod detection;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
