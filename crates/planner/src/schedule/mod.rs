//! Schedule building: conflict detection and plan-driven generation.

pub mod layout;
pub mod meeting;
pub mod stats;
pub mod types;

pub use layout::{layout_week, layout_week_with, LayoutBlock};
pub use meeting::{parse_meeting_time, MeetingTime};
pub use stats::ScheduleStats;
pub use types::{CourseSection, ScheduledCourse, Weekday};

use crate::catalog::Catalog;
use tracing::{debug, info};

/// Decides whether adding `candidate` to a schedule would collide with any
/// course already in it.
///
/// A section already present (same code and section number) counts as a
/// conflict, so the same class cannot be added twice. Beyond that, two
/// courses conflict iff they share a weekday and their clock-time ranges
/// overlap under half-open semantics — back-to-back classes do not collide.
/// Sections whose meeting time cannot be parsed have no fixed slot and
/// never conflict.
pub fn has_conflict(candidate: &CourseSection, existing: &[ScheduledCourse]) -> bool {
    let duplicate = existing
        .iter()
        .any(|sc| sc.course.code == candidate.code && sc.course.section == candidate.section);
    if duplicate {
        debug!(
            code = %candidate.code,
            section = %candidate.section,
            "section is already on the schedule"
        );
        return true;
    }

    let candidate_meeting = match parse_meeting_time(&candidate.meeting_time) {
        Some(meeting) => meeting,
        None => return false,
    };

    for scheduled in existing {
        let Some(meeting) = parse_meeting_time(&scheduled.course.meeting_time) else {
            continue;
        };
        if candidate_meeting.conflicts_with(&meeting) {
            debug!(
                candidate = %candidate.code,
                existing = %scheduled.course.code,
                "time conflict detected"
            );
            return true;
        }
    }

    false
}

/// Result of building a schedule from a required-course list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneratedSchedule {
    /// Sections placed on the schedule, in required-list order.
    pub courses: Vec<ScheduledCourse>,
    /// Required codes with no matching section in the catalog.
    pub unmatched: Vec<String>,
    /// Required codes where every catalog section conflicted.
    pub conflicted: Vec<String>,
}

/// Builds a conflict-free schedule covering as much of `required_codes` as
/// the catalog allows.
///
/// For each required code in order, the first catalog section that does not
/// conflict with the courses placed so far is selected. Codes that match
/// nothing in the catalog land in `unmatched`; codes whose every section
/// collides land in `conflicted`. Greedy and deterministic given the same
/// catalog order.
pub fn generate_schedule(required_codes: &[String], catalog: &Catalog) -> GeneratedSchedule {
    let mut generated = GeneratedSchedule::default();

    for code in required_codes {
        let code = code.trim();
        if code.is_empty() {
            continue;
        }

        let sections = catalog.sections_for(code);
        if sections.is_empty() {
            debug!(code, "no catalog sections found for required course");
            generated.unmatched.push(code.to_string());
            continue;
        }

        let placed = sections.into_iter().find_map(|section| {
            if has_conflict(section, &generated.courses) {
                None
            } else {
                Some(ScheduledCourse::select(section.clone()))
            }
        });

        match placed {
            Some(course) => generated.courses.push(course),
            None => {
                debug!(code, "every section of required course conflicts");
                generated.conflicted.push(code.to_string());
            }
        }
    }

    info!(
        placed = generated.courses.len(),
        unmatched = generated.unmatched.len(),
        conflicted = generated.conflicted.len(),
        "generated schedule"
    );

    generated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(code: &str, section_no: &str, meeting_time: &str) -> CourseSection {
        CourseSection {
            code: code.to_string(),
            section: section_no.to_string(),
            meeting_time: meeting_time.to_string(),
            ..Default::default()
        }
    }

    fn scheduled(code: &str, section_no: &str, meeting_time: &str) -> ScheduledCourse {
        ScheduledCourse::select(section(code, section_no, meeting_time))
    }

    #[test]
    fn test_no_conflict_on_distinct_days() {
        let existing = vec![scheduled("CIS 251", "M001", "MoWe 9:30AM - 10:50AM")];
        let candidate = section("MAT 295", "M002", "TuTh 9:30AM - 10:50AM");
        assert!(!has_conflict(&candidate, &existing));
    }

    #[test]
    fn test_back_to_back_classes_do_not_conflict() {
        let existing = vec![scheduled("CIS 251", "M001", "MoWe 9:30AM - 10:50AM")];
        let candidate = section("CIS 351", "M001", "MoWe 10:50AM - 12:10PM");
        assert!(!has_conflict(&candidate, &existing));
    }

    #[test]
    fn test_overlap_on_shared_day_conflicts() {
        let existing = vec![scheduled("CIS 251", "M001", "MoWe 9:30AM - 10:50AM")];
        let candidate = section("PHY 211", "M003", "We 10:00AM - 11:00AM");
        assert!(has_conflict(&candidate, &existing));
    }

    #[test]
    fn test_conflict_is_symmetric() {
        let a = section("CIS 251", "M001", "MoWe 9:30AM - 10:50AM");
        let b = section("PHY 211", "M003", "We 10:00AM - 11:00AM");
        let against_a = vec![ScheduledCourse::select(a.clone())];
        let against_b = vec![ScheduledCourse::select(b.clone())];
        assert_eq!(has_conflict(&b, &against_a), has_conflict(&a, &against_b));
    }

    #[test]
    fn test_tba_courses_never_conflict() {
        let existing = vec![scheduled("CIS 251", "M001", "MoWe 9:30AM - 10:50AM")];
        assert!(!has_conflict(&section("IND 101", "M001", "TBA"), &existing));

        let tba_existing = vec![scheduled("IND 101", "M001", "")];
        let candidate = section("CIS 351", "M001", "MoWe 9:30AM - 10:50AM");
        assert!(!has_conflict(&candidate, &tba_existing));
    }

    #[test]
    fn test_duplicate_section_conflicts() {
        let existing = vec![scheduled("IND 101", "M001", "TBA")];
        // Same code + section is rejected even without a parsable time.
        assert!(has_conflict(&section("IND 101", "M001", "TBA"), &existing));
        // A different section of the same course is fine.
        assert!(!has_conflict(&section("IND 101", "M002", "TBA"), &existing));
    }

    #[test]
    fn test_generate_schedule_places_non_conflicting_sections() {
        let catalog = Catalog::new(vec![
            section("CIS 251", "M001", "MoWe 9:30AM - 10:50AM"),
            section("MAT 295", "M001", "MoWe 10:00AM - 11:20AM"),
            section("MAT 295", "M002", "TuTh 10:00AM - 11:20AM"),
        ]);
        let required = vec!["CIS 251".to_string(), "MAT 295".to_string()];

        let generated = generate_schedule(&required, &catalog);
        assert_eq!(generated.courses.len(), 2);
        assert_eq!(generated.courses[0].course.code, "CIS 251");
        // The Monday/Wednesday MAT section collides, so the Tuesday/Thursday
        // one is chosen.
        assert_eq!(generated.courses[1].course.section, "M002");
        assert!(generated.unmatched.is_empty());
        assert!(generated.conflicted.is_empty());
    }

    #[test]
    fn test_generate_schedule_reports_unmatched_and_conflicted() {
        let catalog = Catalog::new(vec![
            section("CIS 251", "M001", "MoWe 9:30AM - 10:50AM"),
            section("PHY 211", "M001", "Mo 10:00AM - 11:00AM"),
        ]);
        let required = vec![
            "CIS 251".to_string(),
            "PHY 211".to_string(),
            "BIO 121".to_string(),
        ];

        let generated = generate_schedule(&required, &catalog);
        assert_eq!(generated.courses.len(), 1);
        assert_eq!(generated.conflicted, vec!["PHY 211".to_string()]);
        assert_eq!(generated.unmatched, vec!["BIO 121".to_string()]);
    }
}
