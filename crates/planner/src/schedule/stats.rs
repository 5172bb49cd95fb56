//! Summary statistics for a built schedule.

use super::meeting::parse_meeting_time;
use super::types::ScheduledCourse;
use std::collections::HashSet;

/// Headline numbers shown above the weekly calendar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScheduleStats {
    pub total_courses: usize,
    /// Estimated credit hours. The catalog export carries no credit column,
    /// so this uses the 3.5-credits-per-course heuristic the original
    /// dashboard shipped with.
    pub estimated_credits: u32,
    /// Total weekly in-class time in hours, one decimal place.
    pub weekly_class_hours: f64,
    /// Number of distinct departments across the schedule.
    pub departments: usize,
}

impl ScheduleStats {
    /// Computes stats over the current schedule. Courses without a parsable
    /// meeting time count toward the course and department totals but
    /// contribute no class hours.
    pub fn collect(courses: &[ScheduledCourse]) -> Self {
        let total_courses = courses.len();
        let estimated_credits = (total_courses as f64 * 3.5).round() as u32;

        let mut total_minutes = 0u32;
        for scheduled in courses {
            if let Some(meeting) = parse_meeting_time(&scheduled.course.meeting_time) {
                total_minutes +=
                    u32::from(meeting.duration_minutes()) * meeting.days.len() as u32;
            }
        }
        let weekly_class_hours = (f64::from(total_minutes) / 60.0 * 10.0).round() / 10.0;

        let departments: HashSet<&str> = courses
            .iter()
            .filter_map(|sc| sc.course.department())
            .collect();

        Self {
            total_courses,
            estimated_credits,
            weekly_class_hours,
            departments: departments.len(),
        }
    }
}
