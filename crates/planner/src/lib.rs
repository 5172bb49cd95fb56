//! Scheduling and degree-progress core for a student course planner.
//!
//! Everything in this crate is a synchronous, pure computation over plain
//! data: the UI layer hands in catalog sections and transcript records, and
//! gets back conflict decisions, weekly calendar positions, and per-category
//! progress numbers. There is no I/O here beyond loading catalog and
//! requirements files.

pub mod catalog;
pub mod error;
pub mod progress;
pub mod schedule;

pub use catalog::Catalog;
pub use error::PlannerError;
pub use progress::config::RequirementsConfig;
pub use progress::processor::ProgressProcessor;
pub use progress::types::{CategoryProgress, CompletedCourse, DegreeProgress};
pub use schedule::layout::{layout_week, LayoutBlock};
pub use schedule::meeting::{parse_meeting_time, MeetingTime};
pub use schedule::stats::ScheduleStats;
pub use schedule::types::{CourseSection, ScheduledCourse, Weekday};
pub use schedule::{generate_schedule, has_conflict, GeneratedSchedule};
