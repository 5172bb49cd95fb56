//! Degree progress: transcript aggregation, GPA, and requirement tracking.

pub mod config;
pub mod gpa;
pub mod processor;
pub mod types;

pub use config::{CategoryDef, MajorPlan, RequirementsConfig};
pub use gpa::{calculate_gpa, calculate_total_credits, grade_points};
pub use processor::{ProgressProcessor, FALLBACK_CATEGORY};
pub use types::{
    CategoryProgress, CompletedCourse, DegreeProgress, RemainingCourse, RequirementStanding,
};
