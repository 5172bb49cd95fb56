//! Parsing of free-text meeting strings into structured day/time data.
//!
//! Catalog exports encode meeting slots as strings like
//! `"MoWe 9:30AM - 10:50AM"`. Transcript and catalog data is frequently
//! incomplete ("TBA", empty, or scraping artifacts), so an unparseable
//! string is a recognized state rather than an error: callers get `None`
//! and treat the section as having no fixed slot.

use super::types::Weekday;
use chrono::NaiveTime;
use regex::Regex;
use tracing::warn;

/// A run of two-letter weekday codes, e.g. "MoWe" or "TuTh".
const DAYS_PATTERN: &str = r"(?i)(?:Mo|Tu|We|Th|Fr)+";

/// A 12-hour clock range, e.g. "9:30AM - 10:50AM".
const TIME_RANGE_PATTERN: &str = r"(?i)(\d{1,2}):(\d{2})\s*([AP]M)\s*-\s*(\d{1,2}):(\d{2})\s*([AP]M)";

const TIME_FMT: &str = "%I:%M%p";

/// A parsed meeting slot: the weekdays it repeats on and its clock-time
/// range as minutes past midnight.
///
/// Invariant: `start_minute < end_minute`. [`parse_meeting_time`] never
/// produces a value violating this.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MeetingTime {
    pub days: Vec<Weekday>,
    pub start_minute: u16,
    pub end_minute: u16,
}

impl MeetingTime {
    /// Length of one meeting in minutes.
    pub fn duration_minutes(&self) -> u16 {
        self.end_minute - self.start_minute
    }

    /// Whether both meetings repeat on at least one common weekday.
    pub fn shares_day(&self, other: &MeetingTime) -> bool {
        self.days.iter().any(|day| other.days.contains(day))
    }

    /// Whether the two clock-time ranges overlap, using half-open
    /// semantics: a class ending at 10:50 and one starting at 10:50 do not
    /// overlap.
    pub fn overlaps_in_time(&self, other: &MeetingTime) -> bool {
        self.start_minute < other.end_minute && other.start_minute < self.end_minute
    }

    /// Whether the two meetings collide: a shared weekday plus overlapping
    /// clock times.
    pub fn conflicts_with(&self, other: &MeetingTime) -> bool {
        self.shares_day(other) && self.overlaps_in_time(other)
    }

    /// Start time formatted for display, e.g. "09:30AM".
    pub fn start_label(&self) -> String {
        minute_label(self.start_minute)
    }

    /// End time formatted for display.
    pub fn end_label(&self) -> String {
        minute_label(self.end_minute)
    }

    /// Concatenated day codes, e.g. "MoWe".
    pub fn days_code(&self) -> String {
        self.days.iter().map(|d| d.code()).collect()
    }
}

fn minute_label(minute: u16) -> String {
    NaiveTime::from_hms_opt(u32::from(minute) / 60, u32::from(minute) % 60, 0)
        .map(|t| t.format(TIME_FMT).to_string())
        .unwrap_or_default()
}

/// Parses a free-text meeting string into a [`MeetingTime`].
///
/// Returns `None` when the string carries no recognizable weekday run, no
/// clock-time range, an out-of-range clock component, or a start at or
/// after its end. Deterministic and side-effect free for a given input.
pub fn parse_meeting_time(text: &str) -> Option<MeetingTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let days_re = Regex::new(DAYS_PATTERN).unwrap();
    let time_re = Regex::new(TIME_RANGE_PATTERN).unwrap();

    let days_match = days_re.find(trimmed)?;
    let time_caps = match time_re.captures(trimmed) {
        Some(caps) => caps,
        None => {
            warn!(meeting = %trimmed, "meeting string has days but no parsable time range");
            return None;
        }
    };

    let mut days = Vec::new();
    let run = days_match.as_str();
    for start in (0..run.len()).step_by(2) {
        if let Some(day) = Weekday::from_code(&run[start..start + 2]) {
            if !days.contains(&day) {
                days.push(day);
            }
        }
    }
    if days.is_empty() {
        return None;
    }

    let start_minute = clock_to_minutes(&time_caps[1], &time_caps[2], &time_caps[3])?;
    let end_minute = clock_to_minutes(&time_caps[4], &time_caps[5], &time_caps[6])?;

    if start_minute >= end_minute {
        warn!(
            meeting = %trimmed,
            "meeting string has non-positive duration, treating as unscheduled"
        );
        return None;
    }

    Some(MeetingTime {
        days,
        start_minute,
        end_minute,
    })
}

/// Converts one captured 12-hour clock time to minutes past midnight.
///
/// Hour 12 AM maps to 0 and hour 12 PM stays 12, so midnight is minute 0
/// and noon is minute 720.
fn clock_to_minutes(hour: &str, minute: &str, meridiem: &str) -> Option<u16> {
    let hour: u16 = hour.parse().ok()?;
    let minute: u16 = minute.parse().ok()?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }

    let mut hour_24 = hour % 12;
    if meridiem.eq_ignore_ascii_case("pm") {
        hour_24 += 12;
    }
    Some(hour_24 * 60 + minute)
}
