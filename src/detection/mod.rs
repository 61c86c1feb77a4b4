//! Conflict detection engine
//!
//! Detection compares one target contest against every other live contest:
//!
//! 1. **Time conflicts**: the candidate's scheduled window overlaps the target's.
//! 2. **Venue conflicts**: a target venue and a candidate venue share a name or
//!    an address, and the two windows overlap.
//!
//! Everything here is pure; loading contests and persisting results is done by
//! [`crate::services::ConflictService`] through a [`crate::db::ConflictStore`].

pub mod detector;
pub mod overlap;

pub use detector::ConflictDetector;
pub use overlap::{TimeWindow, windows_overlap};
