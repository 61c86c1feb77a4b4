//! Input validation utilities

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::constants::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if (password.chars().count() as u64) < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 8 characters");
    }
    if (password.chars().count() as u64) > MAX_PASSWORD_LENGTH {
        return Err("Password must be at most 128 characters");
    }
    if !password.chars().any(|c| c.is_alphabetic()) {
        return Err("Password must contain at least one letter");
    }
    if !password.chars().any(|c| c.is_numeric()) {
        return Err("Password must contain at least one number");
    }
    Ok(())
}

/// Validate an optional start/end pair; only checked when both ends are set
pub fn validate_window(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<(), &'static str> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err("end must not be before start"),
        _ => Ok(()),
    }
}

/// Reject strings that are empty after trimming
pub fn validate_not_blank(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err("must not be blank")
    } else {
        Ok(())
    }
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Sanitize optional text, mapping blank input to `None`
pub fn sanitize_optional(input: Option<&str>) -> Option<String> {
    input.map(sanitize_string).filter(|s| !s.is_empty())
}

/// Check a budget total against its category amounts.
///
/// Amounts must not be negative, categories need a total, and together they
/// must not exceed it.
pub fn validate_budget(total: Option<Decimal>, amounts: &[Decimal]) -> Result<(), &'static str> {
    if total.is_some_and(|t| t < Decimal::ZERO) {
        return Err("total must not be negative");
    }
    if amounts.iter().any(|a| *a < Decimal::ZERO) {
        return Err("category amounts must not be negative");
    }

    match total {
        None if !amounts.is_empty() => Err("categories require a total"),
        Some(total) if amounts.iter().copied().sum::<Decimal>() > total => {
            Err("category amounts exceed the total")
        }
        _ => Ok(()),
    }
}

/// Trim facility names and drop blank entries
pub fn normalize_facilities(facilities: &[String]) -> Vec<String> {
    facilities
        .iter()
        .map(|f| sanitize_string(f))
        .filter(|f| !f.is_empty())
        .collect()
}
