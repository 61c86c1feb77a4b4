//! Business logic services

pub mod auth_service;
pub mod conflict_service;
pub mod contest_service;
pub mod notification_service;
pub mod review_service;

pub use auth_service::AuthService;
pub use conflict_service::{ConflictService, DetectionReport};
pub use contest_service::ContestService;
pub use notification_service::NotificationService;
pub use review_service::ReviewService;
