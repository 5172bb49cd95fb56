//! Degree progress aggregation.

use super::config::{MajorPlan, RequirementsConfig};
use super::gpa::{calculate_gpa, calculate_total_credits};
use super::types::{
    CategoryProgress, CompletedCourse, DegreeProgress, RemainingCourse, RequirementStanding,
};
use crate::error::PlannerError;
use crate::schedule::types::normalize_code;
use tracing::debug;

/// Bucket for transcript records whose category is unset or unknown; no
/// record is ever dropped from the credit accounting.
pub const FALLBACK_CATEGORY: &str = "General/Other";

/// Computes per-category and degree-wide progress from a transcript.
pub struct ProgressProcessor {
    config: RequirementsConfig,
}

impl ProgressProcessor {
    /// Creates a processor over the given requirements configuration.
    pub fn new(config: RequirementsConfig) -> Self {
        Self { config }
    }

    /// Gets the requirements configuration.
    pub fn config(&self) -> &RequirementsConfig {
        &self.config
    }

    /// Groups a transcript into requirement categories and totals each one.
    ///
    /// Every configured category appears in the result, in definition
    /// order, even when nothing counts toward it yet; the fallback bucket
    /// is appended once the first uncategorized record shows up. A course
    /// counts toward `completed_credits` iff its grade is neither "WD" nor
    /// "IP" and its credits parse to a positive number. "IP" records are
    /// listed separately and never add credits; "WD" records are dropped.
    pub fn aggregate_requirements(&self, transcript: &[CompletedCourse]) -> Vec<CategoryProgress> {
        let mut buckets: Vec<CategoryProgress> = self
            .config
            .categories
            .iter()
            .map(|def| CategoryProgress {
                category: def.key.clone(),
                display_name: def.display_name.clone(),
                required_credits: def.required_credits,
                remaining_credits: def.required_credits,
                ..Default::default()
            })
            .collect();

        for course in transcript {
            if course.is_withdrawn() {
                continue;
            }

            let key = course
                .requirement_category
                .as_deref()
                .filter(|key| self.config.category(key).is_some())
                .unwrap_or(FALLBACK_CATEGORY);

            let index = match buckets.iter().position(|b| b.category == key) {
                Some(index) => index,
                None => {
                    debug!(
                        code = %course.code,
                        category = ?course.requirement_category,
                        "routing course to fallback requirement bucket"
                    );
                    buckets.push(self.fallback_bucket());
                    buckets.len() - 1
                }
            };
            let bucket = &mut buckets[index];

            if course.is_in_progress() {
                bucket.in_progress_courses.push(course.clone());
            } else {
                if let Some(credits) = course.parsed_credits() {
                    bucket.completed_credits += credits;
                }
                bucket.completed_courses.push(course.clone());
            }
        }

        for bucket in &mut buckets {
            bucket.remaining_credits =
                (bucket.required_credits - bucket.completed_credits).max(0.0);
        }

        buckets
    }

    /// Required courses from the major plan the student has not completed.
    ///
    /// A plan course is `Missing` when the transcript has no record for it
    /// (or only a withdrawal) and `InProgress` when its record is graded
    /// "IP". Completed courses are omitted. Plan years are walked in
    /// curriculum order.
    pub fn remaining_courses(
        &self,
        major: &str,
        transcript: &[CompletedCourse],
    ) -> Result<Vec<RemainingCourse>, PlannerError> {
        let plan = self
            .config
            .major(major)
            .ok_or_else(|| PlannerError::UnknownMajor {
                major: major.to_string(),
            })?;

        Ok(remaining_from_plan(plan, transcript))
    }

    /// Full degree-progress summary: credit totals, GPA, per-category
    /// progress, and the remaining-course list for the major.
    pub fn degree_progress(
        &self,
        major: &str,
        transcript: &[CompletedCourse],
    ) -> Result<DegreeProgress, PlannerError> {
        let remaining_courses = self.remaining_courses(major, transcript)?;

        let total_credits_completed = calculate_total_credits(transcript);
        let total_credits_required = self.config.total_required_credits();
        let total_credits_remaining = (total_credits_required - total_credits_completed).max(0.0);

        Ok(DegreeProgress {
            major: major.to_string(),
            gpa: calculate_gpa(transcript),
            total_credits_completed,
            total_credits_required,
            total_credits_remaining,
            categories: self.aggregate_requirements(transcript),
            remaining_courses,
        })
    }

    fn fallback_bucket(&self) -> CategoryProgress {
        // The fallback bucket can carry its own threshold in the config;
        // absent that, it imposes no credit requirement.
        let required_credits = self
            .config
            .category(FALLBACK_CATEGORY)
            .map(|def| def.required_credits)
            .unwrap_or(0.0);

        CategoryProgress {
            category: FALLBACK_CATEGORY.to_string(),
            display_name: FALLBACK_CATEGORY.to_string(),
            required_credits,
            remaining_credits: required_credits,
            ..Default::default()
        }
    }
}

fn remaining_from_plan(plan: &MajorPlan, transcript: &[CompletedCourse]) -> Vec<RemainingCourse> {
    let mut remaining = Vec::new();

    for (year, code) in plan.all_courses() {
        let record = transcript
            .iter()
            .find(|c| normalize_code(&c.code) == normalize_code(code));

        let standing = match record {
            None => RequirementStanding::Missing,
            Some(c) if c.is_withdrawn() => RequirementStanding::Missing,
            Some(c) if c.is_in_progress() => RequirementStanding::InProgress,
            Some(_) => continue,
        };

        remaining.push(RemainingCourse {
            code: code.clone(),
            year: year.to_string(),
            standing,
        });
    }

    remaining
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::config::CategoryDef;
    use std::collections::HashMap;

    fn config() -> RequirementsConfig {
        let mut majors = HashMap::new();
        majors.insert(
            "Computer Science".to_string(),
            MajorPlan {
                years: HashMap::from([
                    (
                        "Freshman".to_string(),
                        vec!["CIS 151".to_string(), "MAT 295".to_string()],
                    ),
                    ("Sophomore".to_string(), vec!["CIS 251".to_string()]),
                ]),
            },
        );

        RequirementsConfig {
            categories: vec![
                CategoryDef {
                    key: "CIS Core".to_string(),
                    display_name: "CIS Core".to_string(),
                    required_credits: 33.0,
                },
                CategoryDef {
                    key: "Math/Science".to_string(),
                    display_name: "Math & Science".to_string(),
                    required_credits: 65.0,
                },
            ],
            majors,
        }
    }

    fn course(code: &str, grade: &str, credits: &str, category: Option<&str>) -> CompletedCourse {
        CompletedCourse {
            code: code.to_string(),
            grade: grade.to_string(),
            credits: credits.to_string(),
            requirement_category: category.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_categories_keep_definition_order() {
        let processor = ProgressProcessor::new(config());
        let buckets = processor.aggregate_requirements(&[]);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].category, "CIS Core");
        assert_eq!(buckets[1].category, "Math/Science");
        assert_eq!(buckets[0].completed_credits, 0.0);
        assert_eq!(buckets[0].remaining_credits, 33.0);
    }

    #[test]
    fn test_credits_accumulate_per_category() {
        let processor = ProgressProcessor::new(config());
        let transcript = vec![
            course("CIS 151", "A", "4", Some("CIS Core")),
            course("CIS 251", "B+", "3", Some("CIS Core")),
            course("MAT 295", "A-", "4", Some("Math/Science")),
        ];
        let buckets = processor.aggregate_requirements(&transcript);

        assert_eq!(buckets[0].completed_credits, 7.0);
        assert_eq!(buckets[0].remaining_credits, 26.0);
        assert_eq!(buckets[0].completed_courses.len(), 2);
        assert_eq!(buckets[1].completed_credits, 4.0);
    }

    #[test]
    fn test_in_progress_tracked_separately_and_withdrawn_dropped() {
        let processor = ProgressProcessor::new(config());
        let transcript = vec![
            course("CIS 351", "IP", "3", Some("CIS Core")),
            course("CIS 321", "WD", "3", Some("CIS Core")),
        ];
        let buckets = processor.aggregate_requirements(&transcript);

        assert_eq!(buckets[0].completed_credits, 0.0);
        assert_eq!(buckets[0].in_progress_courses.len(), 1);
        assert!(buckets[0].completed_courses.is_empty());
    }

    #[test]
    fn test_unknown_category_routes_to_fallback() {
        let processor = ProgressProcessor::new(config());
        let transcript = vec![
            course("PSY 205", "B", "3", Some("Social Science")),
            course("FYS 101", "A", "1", None),
        ];
        let buckets = processor.aggregate_requirements(&transcript);

        assert_eq!(buckets.len(), 3);
        let fallback = &buckets[2];
        assert_eq!(fallback.category, FALLBACK_CATEGORY);
        assert_eq!(fallback.completed_credits, 4.0);
        assert_eq!(fallback.remaining_credits, 0.0);
        assert_eq!(fallback.percent_complete(), 100);
    }

    #[test]
    fn test_malformed_credits_still_listed_but_count_nothing() {
        let processor = ProgressProcessor::new(config());
        let transcript = vec![course("CIS 151", "A", "n/a", Some("CIS Core"))];
        let buckets = processor.aggregate_requirements(&transcript);

        assert_eq!(buckets[0].completed_credits, 0.0);
        assert_eq!(buckets[0].completed_courses.len(), 1);
    }

    #[test]
    fn test_remaining_credits_never_negative() {
        let processor = ProgressProcessor::new(config());
        let transcript = vec![course("CIS 151", "A", "40", Some("CIS Core"))];
        let buckets = processor.aggregate_requirements(&transcript);

        assert_eq!(buckets[0].completed_credits, 40.0);
        assert_eq!(buckets[0].remaining_credits, 0.0);
    }

    #[test]
    fn test_remaining_courses_standings() {
        let processor = ProgressProcessor::new(config());
        let transcript = vec![
            course("CIS 151", "A", "4", None),
            course("MAT 295", "WD", "4", None),
            course("CIS 251", "IP", "3", None),
        ];
        let remaining = processor
            .remaining_courses("Computer Science", &transcript)
            .unwrap();

        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining[0].code, "MAT 295");
        assert_eq!(remaining[0].year, "Freshman");
        assert_eq!(remaining[0].standing, RequirementStanding::Missing);
        assert_eq!(remaining[1].code, "CIS 251");
        assert_eq!(remaining[1].standing, RequirementStanding::InProgress);
    }

    #[test]
    fn test_remaining_courses_unknown_major() {
        let processor = ProgressProcessor::new(config());
        let err = processor.remaining_courses("Basket Weaving", &[]).unwrap_err();
        assert!(matches!(err, PlannerError::UnknownMajor { .. }));
    }

    #[test]
    fn test_degree_progress_totals() {
        let processor = ProgressProcessor::new(config());
        let transcript = vec![
            course("CIS 151", "A", "4", Some("CIS Core")),
            course("MAT 295", "B", "4", Some("Math/Science")),
            course("CIS 251", "IP", "3", Some("CIS Core")),
        ];
        let progress = processor
            .degree_progress("Computer Science", &transcript)
            .unwrap();

        assert_eq!(progress.gpa, "3.50");
        assert_eq!(progress.total_credits_completed, 8.0);
        assert_eq!(progress.total_credits_required, 98.0);
        assert_eq!(progress.total_credits_remaining, 90.0);
        assert_eq!(progress.categories.len(), 2);
        // CIS 251 is in progress, everything else on the plan is done.
        assert_eq!(progress.remaining_courses.len(), 1);
        assert_eq!(
            progress.remaining_courses[0].standing,
            RequirementStanding::InProgress
        );
    }
}
