//! Types for transcript records and degree-progress reporting.

use serde::{Deserialize, Serialize};

/// One transcript record, as imported from the scraped academic history or
/// the bundled sample data.
///
/// Immutable for the purposes of this crate; a re-import replaces the whole
/// transcript.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedCourse {
    pub code: String,

    #[serde(default)]
    pub title: String,

    /// Letter grade, or the status markers "IP" (in progress) / "WD"
    /// (withdrawn).
    pub grade: String,

    /// Credit hours as a decimal string, e.g. "3.0". Malformed values
    /// contribute zero everywhere.
    #[serde(default)]
    pub credits: String,

    #[serde(default)]
    pub term: String,

    /// Requirement category the record was filed under, when known.
    #[serde(default)]
    pub requirement_category: Option<String>,
}

impl CompletedCourse {
    pub fn is_in_progress(&self) -> bool {
        self.grade.trim() == "IP"
    }

    pub fn is_withdrawn(&self) -> bool {
        self.grade.trim() == "WD"
    }

    /// Credit hours parsed from the transcript string, if positive.
    pub fn parsed_credits(&self) -> Option<f64> {
        self.credits
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|c| *c > 0.0)
    }
}

/// Progress within one requirement category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgress {
    /// Category key as it appears on transcript records.
    pub category: String,
    pub display_name: String,
    pub completed_credits: f64,
    pub required_credits: f64,
    pub remaining_credits: f64,
    /// Courses that counted toward the category (graded, not withdrawn).
    pub completed_courses: Vec<CompletedCourse>,
    /// "IP" courses occupying a slot but not yet counting credits.
    pub in_progress_courses: Vec<CompletedCourse>,
}

impl CategoryProgress {
    /// Completion percentage, capped at 100. A category requiring nothing
    /// reports 100.
    pub fn percent_complete(&self) -> u32 {
        if self.required_credits <= 0.0 {
            return 100;
        }
        let percent = (self.completed_credits / self.required_credits * 100.0).round();
        (percent as u32).min(100)
    }
}

/// Standing of a required course that is not yet completed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum RequirementStanding {
    /// Not on the transcript, or withdrawn.
    Missing,
    /// On the transcript with grade "IP".
    InProgress,
}

/// A required course the student still has to finish, with the plan year
/// it is listed under.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemainingCourse {
    pub code: String,
    pub year: String,
    pub standing: RequirementStanding,
}

/// Aggregated degree progress for one student and major.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DegreeProgress {
    pub major: String,
    /// Cumulative GPA formatted to two decimals.
    pub gpa: String,
    pub total_credits_completed: f64,
    pub total_credits_required: f64,
    pub total_credits_remaining: f64,
    pub categories: Vec<CategoryProgress>,
    pub remaining_courses: Vec<RemainingCourse>,
}
