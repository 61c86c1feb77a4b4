//! Time and venue conflict matching

use crate::{
    constants::DESCRIPTION_TIME_FORMAT,
    models::{ConflictType, Contest, ContestWithVenues, DetectedConflict, Severity, Venue},
};

use super::overlap::TimeWindow;

/// Matches one target contest against a set of candidate contests
pub struct ConflictDetector<'a> {
    target: &'a ContestWithVenues,
    window: Option<TimeWindow>,
}

impl<'a> ConflictDetector<'a> {
    /// Create a detector for the given target contest
    pub fn new(target: &'a ContestWithVenues) -> Self {
        let window = target
            .contest
            .schedule()
            .map(|(start, end)| TimeWindow::new(start, end));

        Self { target, window }
    }

    /// Detect all conflicts between the target and `candidates`.
    ///
    /// Candidates that are the target itself, rejected, or unscheduled are
    /// skipped. A target without a full schedule yields no conflicts.
    ///
    /// Output order: every time conflict (candidate order), then every venue
    /// conflict (target venue order, then candidate order).
    pub fn detect(&self, candidates: &[ContestWithVenues]) -> Vec<DetectedConflict> {
        let Some(window) = self.window else {
            return Vec::new();
        };

        let target_id = self.target.contest.id;
        let overlapping: Vec<(&ContestWithVenues, TimeWindow)> = candidates
            .iter()
            .filter(|c| c.contest.is_candidate_for(&target_id))
            .filter_map(|c| {
                c.contest
                    .schedule()
                    .map(|(start, end)| (c, TimeWindow::new(start, end)))
            })
            .filter(|(_, candidate_window)| window.overlaps(candidate_window))
            .collect();

        let mut conflicts: Vec<DetectedConflict> = overlapping
            .iter()
            .map(|(candidate, span)| time_conflict(&candidate.contest, span))
            .collect();

        for venue in &self.target.venues {
            for (candidate, candidate_window) in &overlapping {
                let shared = candidate
                    .venues
                    .iter()
                    .find(|other| venue.is_same_place(other));

                if let Some(shared) = shared {
                    conflicts.push(venue_conflict(
                        venue,
                        shared,
                        &candidate.contest,
                        candidate_window,
                    ));
                }
            }
        }

        conflicts
    }
}

fn time_conflict(candidate: &Contest, window: &TimeWindow) -> DetectedConflict {
    DetectedConflict {
        conflict_type: ConflictType::Time,
        with_id: candidate.id,
        with_name: candidate.name.clone(),
        description: format!(
            "Schedule overlaps with contest \"{}\" ({})",
            candidate.name,
            format_window(window)
        ),
        severity: Severity::High,
    }
}

fn venue_conflict(
    venue: &Venue,
    shared: &Venue,
    candidate: &Contest,
    window: &TimeWindow,
) -> DetectedConflict {
    let description = if venue.name == shared.name {
        format!(
            "Venue \"{}\" is also booked by contest \"{}\" ({})",
            venue.name,
            candidate.name,
            format_window(window)
        )
    } else {
        format!(
            "Venue \"{}\" shares its address with venue \"{}\" booked by contest \"{}\" ({})",
            venue.name,
            shared.name,
            candidate.name,
            format_window(window)
        )
    };

    DetectedConflict {
        conflict_type: ConflictType::Venue,
        with_id: candidate.id,
        with_name: candidate.name.clone(),
        description,
        severity: Severity::High,
    }
}

fn format_window(window: &TimeWindow) -> String {
    format!(
        "{} to {}",
        window.start.format(DESCRIPTION_TIME_FORMAT),
        window.end.format(DESCRIPTION_TIME_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContestStatus, Incentives};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn contest(name: &str, from: (u32, u32), to: (u32, u32)) -> ContestWithVenues {
        let now = Utc::now();
        ContestWithVenues {
            contest: Contest {
                id: Uuid::new_v4(),
                name: name.to_string(),
                contest_type: "programming".to_string(),
                start_date: Utc.with_ymd_and_hms(2025, from.0, from.1, 0, 0, 0).single(),
                end_date: Utc.with_ymd_and_hms(2025, to.0, to.1, 0, 0, 0).single(),
                registration_start: None,
                registration_end: None,
                location: None,
                online_mode: false,
                rules: None,
                incentives: Incentives::default(),
                status: ContestStatus::Published,
                created_at: now,
                updated_at: now,
            },
            venues: Vec::new(),
        }
    }

    fn with_venue(
        mut c: ContestWithVenues,
        name: &str,
        address: Option<&str>,
    ) -> ContestWithVenues {
        c.venues.push(Venue {
            id: Uuid::new_v4(),
            contest_id: c.contest.id,
            name: name.to_string(),
            capacity: None,
            address: address.map(str::to_string),
            facilities: Vec::new(),
        });
        c
    }

    #[test]
    fn test_time_and_venue_conflict() {
        let target = with_venue(contest("Contest 1", (6, 1), (6, 3)), "Hall A", None);
        let other = with_venue(contest("Contest 2", (6, 2), (6, 4)), "Hall A", None);

        let conflicts = ConflictDetector::new(&target).detect(std::slice::from_ref(&other));

        assert_eq!(conflicts.len(), 2);
        assert_eq!(conflicts[0].conflict_type, ConflictType::Time);
        assert_eq!(conflicts[1].conflict_type, ConflictType::Venue);
        assert!(conflicts.iter().all(|c| c.with_id == other.contest.id));
        assert!(conflicts.iter().all(|c| c.severity == Severity::High));
        assert!(conflicts[1].description.contains("Hall A"));
    }

    #[test]
    fn test_no_overlap_no_conflicts() {
        let target = with_venue(contest("Contest 3", (1, 1), (1, 2)), "Hall A", None);
        let other = with_venue(contest("Contest 4", (3, 1), (3, 2)), "Hall B", None);

        assert!(ConflictDetector::new(&target).detect(&[other]).is_empty());
    }

    #[test]
    fn test_shared_venue_without_overlap_is_not_a_conflict() {
        let target = with_venue(contest("Winter", (1, 1), (1, 2)), "Hall A", None);
        let other = with_venue(contest("Spring", (3, 1), (3, 2)), "Hall A", None);

        assert!(ConflictDetector::new(&target).detect(&[other]).is_empty());
    }

    #[test]
    fn test_target_contained_in_longer_candidate() {
        let target = contest("Weekend", (6, 5), (6, 6));
        let other = contest("Month Long", (6, 1), (6, 30));

        let conflicts = ConflictDetector::new(&target).detect(&[other]);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].conflict_type, ConflictType::Time);
    }

    #[test]
    fn test_venue_matched_by_address() {
        let target = with_venue(contest("A", (6, 1), (6, 3)), "Main Hall", Some("1 Campus Rd"));
        let other = with_venue(contest("B", (6, 2), (6, 4)), "Auditorium", Some("1 Campus Rd"));

        let conflicts = ConflictDetector::new(&target).detect(&[other]);
        let venue = conflicts
            .iter()
            .find(|c| c.conflict_type == ConflictType::Venue)
            .unwrap();
        assert!(venue.description.contains("shares its address"));
    }

    #[test]
    fn test_rejected_and_unscheduled_candidates_are_skipped() {
        let target = contest("Target", (6, 1), (6, 3));

        let mut rejected = contest("Rejected", (6, 1), (6, 3));
        rejected.contest.status = ContestStatus::Rejected;

        let mut unscheduled = contest("Unscheduled", (6, 1), (6, 3));
        unscheduled.contest.end_date = None;

        let conflicts = ConflictDetector::new(&target).detect(&[rejected, unscheduled]);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_target_is_never_its_own_candidate() {
        let target = with_venue(contest("Self", (6, 1), (6, 3)), "Hall A", None);
        assert!(ConflictDetector::new(&target).detect(std::slice::from_ref(&target)).is_empty());
    }

    #[test]
    fn test_unscheduled_target_yields_nothing() {
        let mut target = with_venue(contest("Draft", (6, 1), (6, 3)), "Hall A", None);
        target.contest.start_date = None;
        let other = with_venue(contest("Other", (6, 1), (6, 3)), "Hall A", None);

        assert!(ConflictDetector::new(&target).detect(&[other]).is_empty());
    }

    #[test]
    fn test_ordering_time_first_then_venues() {
        let target = with_venue(
            with_venue(contest("Target", (6, 1), (6, 5)), "Hall A", None),
            "Hall B",
            None,
        );
        let first = with_venue(contest("First", (6, 2), (6, 3)), "Hall B", None);
        let second = with_venue(contest("Second", (6, 4), (6, 6)), "Hall A", None);

        let conflicts = ConflictDetector::new(&target).detect(&[first.clone(), second.clone()]);
        let order: Vec<(ConflictType, Uuid)> = conflicts
            .iter()
            .map(|c| (c.conflict_type, c.with_id))
            .collect();

        assert_eq!(
            order,
            vec![
                (ConflictType::Time, first.contest.id),
                (ConflictType::Time, second.contest.id),
                (ConflictType::Venue, second.contest.id),
                (ConflictType::Venue, first.contest.id),
            ]
        );
    }

    #[test]
    fn test_detection_is_deterministic() {
        let target = with_venue(contest("Contest 1", (6, 1), (6, 3)), "Hall A", None);
        let others = vec![
            with_venue(contest("Contest 2", (6, 2), (6, 4)), "Hall A", None),
            contest("Contest 5", (6, 3), (6, 8)),
        ];

        let detector = ConflictDetector::new(&target);
        assert_eq!(detector.detect(&others), detector.detect(&others));
    }
}
