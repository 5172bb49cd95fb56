//! Requirement configuration: category credit thresholds and per-major
//! course plans.
//!
//! Everything here is external data maintained alongside the app, not
//! inline literals. The JSON shapes match the files the original pipeline
//! produced (`engineering_majors_requirements.json` and the category
//! threshold table).

use crate::error::PlannerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// One requirement category with its credit threshold.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoryDef {
    /// Key as it appears on transcript records, e.g. "CIS Core GPA (33 Credits)".
    pub key: String,

    /// Short human-readable name, e.g. "CIS Core".
    #[serde(rename = "name")]
    pub display_name: String,

    #[serde(rename = "required")]
    pub required_credits: f64,
}

/// Suggested course codes for one major, keyed by plan year.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MajorPlan {
    #[serde(flatten)]
    pub years: HashMap<String, Vec<String>>,
}

impl MajorPlan {
    /// Plan years in curriculum order.
    pub const YEARS: [&'static str; 4] = ["Freshman", "Sophomore", "Junior", "Senior"];

    /// Required course codes listed under one plan year.
    pub fn courses_for_year(&self, year: &str) -> &[String] {
        self.years.get(year).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All required codes across the four plan years, with the year each is
    /// listed under, in curriculum order.
    pub fn all_courses(&self) -> Vec<(&'static str, &String)> {
        Self::YEARS
            .iter()
            .flat_map(|year| {
                self.courses_for_year(year)
                    .iter()
                    .map(move |code| (*year, code))
            })
            .collect()
    }
}

/// Top-level requirements configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RequirementsConfig {
    /// Category definitions in the order the institution lists them.
    #[serde(default)]
    pub categories: Vec<CategoryDef>,

    /// Per-major suggested plans, keyed by major name.
    #[serde(default)]
    pub majors: HashMap<String, MajorPlan>,
}

impl RequirementsConfig {
    /// Creates an empty configuration.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the configuration from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, PlannerError> {
        let content = fs::read_to_string(path).map_err(|source| PlannerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: RequirementsConfig =
            serde_json::from_str(&content).map_err(|source| PlannerError::MalformedJson {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            path = %path.display(),
            categories = config.categories.len(),
            majors = config.majors.len(),
            "loaded requirements config"
        );
        Ok(config)
    }

    /// Gets a category definition by its transcript key.
    pub fn category(&self, key: &str) -> Option<&CategoryDef> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Gets the plan for a major by name.
    pub fn major(&self, name: &str) -> Option<&MajorPlan> {
        self.majors.get(name)
    }

    /// Sum of all category credit thresholds; the degree-wide requirement.
    pub fn total_required_credits(&self) -> f64 {
        self.categories.iter().map(|c| c.required_credits).sum()
    }
}
