//! GPA and credit totals over a transcript.

use super::types::CompletedCourse;

/// Grade points on the 4.0 scale.
///
/// The flat table is canonical here: every D variant is worth 1.0. "IP",
/// "WD", pass/fail marks, and anything unrecognized carry no points and are
/// excluded from the GPA entirely.
pub fn grade_points(grade: &str) -> Option<f64> {
    match grade.trim() {
        "A+" | "A" => Some(4.0),
        "A-" => Some(3.7),
        "B+" => Some(3.3),
        "B" => Some(3.0),
        "B-" => Some(2.7),
        "C+" => Some(2.3),
        "C" => Some(2.0),
        "C-" => Some(1.7),
        "D+" | "D" | "D-" => Some(1.0),
        "F" => Some(0.0),
        _ => None,
    }
}

/// Whether a grade's credits count toward the attempted-credit total.
/// Only "IP" and "WD" are excluded; an F still counts as attempted credits,
/// and so do pass/fail marks.
pub fn counts_toward_credits(grade: &str) -> bool {
    !matches!(grade.trim(), "IP" | "WD")
}

/// Credit-weighted GPA over all counting courses, formatted to exactly two
/// decimal places. Returns "0.00" when no course contributes to the
/// denominator.
pub fn calculate_gpa(courses: &[CompletedCourse]) -> String {
    let mut total_points = 0.0;
    let mut total_credits = 0.0;

    for course in courses {
        if let (Some(points), Some(credits)) =
            (grade_points(&course.grade), course.parsed_credits())
        {
            total_points += points * credits;
            total_credits += credits;
        }
    }

    if total_credits > 0.0 {
        format!("{:.2}", total_points / total_credits)
    } else {
        "0.00".to_string()
    }
}

/// Total credits over all courses whose grade is not "IP"/"WD". Malformed
/// credit strings contribute zero.
pub fn calculate_total_credits(courses: &[CompletedCourse]) -> f64 {
    courses
        .iter()
        .filter(|c| counts_toward_credits(&c.grade))
        .filter_map(|c| c.parsed_credits())
        .sum()
}
