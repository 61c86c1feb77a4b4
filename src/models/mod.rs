//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod conflict;
pub mod contest;
pub mod notification;
pub mod resource;
pub mod review;
pub mod user;
pub mod venue;

pub use conflict::*;
pub use contest::*;
pub use notification::*;
pub use resource::*;
pub use review::*;
pub use user::*;
pub use venue::*;
