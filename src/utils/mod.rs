//! Utility functions

pub mod pagination;
pub mod validation;

pub use pagination::{page_bounds, page_params};
pub use validation::{validate_password, validate_window};
