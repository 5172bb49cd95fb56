//! Core types for the scheduling side of the planner.

use serde::{Deserialize, Serialize};

/// A weekday a course section can meet on. Weekend meetings do not occur in
/// the source catalog, so the calendar only models Monday through Friday.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays in calendar-column order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Parses a two-letter day code (`Mo`, `Tu`, `We`, `Th`, `Fr`),
    /// case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "mo" => Some(Weekday::Monday),
            "tu" => Some(Weekday::Tuesday),
            "we" => Some(Weekday::Wednesday),
            "th" => Some(Weekday::Thursday),
            "fr" => Some(Weekday::Friday),
            _ => None,
        }
    }

    /// The two-letter code used in catalog meeting strings.
    pub fn code(&self) -> &'static str {
        match self {
            Weekday::Monday => "Mo",
            Weekday::Tuesday => "Tu",
            Weekday::Wednesday => "We",
            Weekday::Thursday => "Th",
            Weekday::Friday => "Fr",
        }
    }

    /// Full display name for calendar headers.
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    /// Zero-based calendar column index (Monday = 0).
    pub fn to_index(&self) -> usize {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
        }
    }
}

/// A schedulable unit from the course catalog.
///
/// Field names mirror the catalog export columns (`Class`, `Section`,
/// `DaysTimes`, ...) so catalog JSON and CSV files deserialize directly.
/// Sections are read-only reference data; nothing in the planner mutates
/// them after load.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseSection {
    /// Course code, e.g. "CIS 251"
    #[serde(rename = "Class", default)]
    pub code: String,

    #[serde(rename = "Section", default)]
    pub section: String,

    #[serde(rename = "Instructor", default)]
    pub instructor: String,

    #[serde(rename = "Room", default)]
    pub room: String,

    /// Free-text meeting string, e.g. "MoWe 9:30AM - 10:50AM". May be empty
    /// or "TBA" for sections without a fixed slot.
    #[serde(rename = "DaysTimes", default)]
    pub meeting_time: String,

    #[serde(rename = "MeetingDates", default, skip_serializing_if = "Option::is_none")]
    pub meeting_dates: Option<String>,

    #[serde(rename = "RMP_Rating", default, skip_serializing_if = "Option::is_none")]
    pub rmp_rating: Option<String>,
}

impl CourseSection {
    /// Leading alphabetic prefix of the course code, e.g. "CIS" for
    /// "CIS 251". Empty codes yield `None`.
    pub fn department(&self) -> Option<&str> {
        let end = self
            .code
            .char_indices()
            .find(|(_, c)| !c.is_ascii_alphabetic())
            .map(|(i, _)| i)
            .unwrap_or(self.code.len());
        if end == 0 {
            None
        } else {
            Some(&self.code[..end])
        }
    }

    /// Whether this section's code refers to the given course code.
    ///
    /// Catalog exports are inconsistent about spacing ("CIS 251" vs
    /// "CIS251"), so codes compare with whitespace stripped and case
    /// folded. An exact match is preferred; a substring match covers codes
    /// carrying trailing qualifiers.
    pub fn matches_code(&self, code: &str) -> bool {
        let own = normalize_code(&self.code);
        let wanted = normalize_code(code);
        if own.is_empty() || wanted.is_empty() {
            return false;
        }
        own == wanted || own.contains(&wanted)
    }
}

/// Strips whitespace and case from a course code for comparison.
pub(crate) fn normalize_code(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase()
}

/// A catalog section the student has added to their schedule.
///
/// Carries a synthetic id assigned at selection time; sections have no
/// natural key in the catalog data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduledCourse {
    pub id: String,

    #[serde(flatten)]
    pub course: CourseSection,
}

impl ScheduledCourse {
    /// Wraps a catalog section with a fresh selection id.
    pub fn select(course: CourseSection) -> Self {
        Self {
            id: selection_id(),
            course,
        }
    }

    /// Wraps a catalog section with a caller-provided id (used when
    /// restoring a saved schedule).
    pub fn with_id(id: impl Into<String>, course: CourseSection) -> Self {
        Self {
            id: id.into(),
            course,
        }
    }
}

/// Generates a unique selection id from the clock and a random component.
fn selection_id() -> String {
    use rand::Rng;
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros();
    let random: u32 = rand::thread_rng().gen();
    format!("course-{:x}-{:08x}", timestamp, random)
}
