//! Interval overlap

use chrono::{DateTime, Utc};

/// Closed time interval `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whether this window shares at least one instant with `other`
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        windows_overlap(self, other)
    }
}

/// Inclusive overlap test: `a.start <= b.end && b.start <= a.end`.
///
/// Touching endpoints count as overlapping, and either window may fully
/// contain the other.
pub fn windows_overlap(a: &TimeWindow, b: &TimeWindow) -> bool {
    a.start <= b.end && b.start <= a.end
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, m, d, 0, 0, 0).unwrap()
    }

    fn window(from: (u32, u32), to: (u32, u32)) -> TimeWindow {
        TimeWindow::new(day(from.0, from.1), day(to.0, to.1))
    }

    #[test]
    fn test_partial_overlap_either_edge() {
        let target = window((6, 1), (6, 3));
        assert!(target.overlaps(&window((6, 2), (6, 4))));
        assert!(target.overlaps(&window((5, 30), (6, 2))));
    }

    #[test]
    fn test_candidate_inside_target() {
        assert!(window((6, 1), (6, 10)).overlaps(&window((6, 3), (6, 4))));
    }

    #[test]
    fn test_target_inside_larger_candidate() {
        // Candidate starts before and ends after the target
        assert!(window((6, 3), (6, 4)).overlaps(&window((6, 1), (6, 10))));
    }

    #[test]
    fn test_touching_endpoints_overlap() {
        assert!(window((6, 1), (6, 3)).overlaps(&window((6, 3), (6, 5))));
    }

    #[test]
    fn test_disjoint_windows() {
        let a = window((1, 1), (1, 2));
        let b = window((3, 1), (3, 2));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = window((6, 1), (6, 3));
        let b = window((6, 2), (6, 9));
        assert_eq!(windows_overlap(&a, &b), windows_overlap(&b, &a));
    }
}
