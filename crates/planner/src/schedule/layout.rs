//! Weekly calendar layout.
//!
//! Converts a set of scheduled courses into pixel positions for a weekly
//! grid: one block per course per meeting day, positioned vertically by
//! clock time. The layout engine does not prevent or resolve visual
//! overlaps; keeping the schedule conflict-free is the insertion-time
//! conflict check's job.

use super::meeting::parse_meeting_time;
use super::types::{ScheduledCourse, Weekday};
use std::collections::BTreeMap;
use tracing::debug;

/// First hour shown on the calendar grid (8 AM).
pub const CALENDAR_START_HOUR: u32 = 8;

/// Rendered height of one hour, in pixels.
pub const HOUR_HEIGHT_PX: f32 = 60.0;

/// Day a section without a parsable meeting time is shown under, so that
/// nothing silently disappears from the view.
pub const TBA_FALLBACK_DAY: Weekday = Weekday::Monday;

/// One positioned event on the weekly grid.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutBlock {
    pub course: ScheduledCourse,
    pub top_px: f32,
    pub height_px: f32,
}

/// Lays out courses on the default grid (8 AM start, 60 px per hour).
pub fn layout_week(courses: &[ScheduledCourse]) -> BTreeMap<Weekday, Vec<LayoutBlock>> {
    layout_week_with(courses, CALENDAR_START_HOUR, HOUR_HEIGHT_PX)
}

/// Lays out courses on a grid starting at `start_hour` with `hour_height_px`
/// pixels per hour.
///
/// Every course yields at least one block: parsed meeting times produce one
/// block per meeting day, and unparseable ("TBA") sections produce a single
/// one-hour block at the top of the fallback day. Within a day, blocks keep
/// the input order of `courses`.
pub fn layout_week_with(
    courses: &[ScheduledCourse],
    start_hour: u32,
    hour_height_px: f32,
) -> BTreeMap<Weekday, Vec<LayoutBlock>> {
    let grid_start_minute = (start_hour * 60) as f32;
    let mut week: BTreeMap<Weekday, Vec<LayoutBlock>> = BTreeMap::new();

    for scheduled in courses {
        match parse_meeting_time(&scheduled.course.meeting_time) {
            Some(meeting) => {
                let top_px =
                    (f32::from(meeting.start_minute) - grid_start_minute) * hour_height_px / 60.0;
                let height_px = f32::from(meeting.duration_minutes()) * hour_height_px / 60.0;

                for day in meeting.days {
                    week.entry(day).or_default().push(LayoutBlock {
                        course: scheduled.clone(),
                        top_px,
                        height_px,
                    });
                }
            }
            None => {
                debug!(
                    course = %scheduled.course.code,
                    "no parsable meeting time, placing TBA block"
                );
                week.entry(TBA_FALLBACK_DAY).or_default().push(LayoutBlock {
                    course: scheduled.clone(),
                    top_px: 0.0,
                    height_px: hour_height_px,
                });
            }
        }
    }

    week
}
