//! Course catalog loading and lookup.
//!
//! The catalog is read-only reference data loaded once per session, either
//! from the JSON produced by the scraping pipeline or straight from its
//! intermediate CSV export. Both carry the same columns (`Class`,
//! `Section`, `DaysTimes`, ...).

use crate::error::PlannerError;
use crate::schedule::types::{normalize_code, CourseSection};
use std::fs;
use std::path::Path;
use tracing::info;

/// An in-memory course catalog.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    sections: Vec<CourseSection>,
}

impl Catalog {
    /// Wraps an already-loaded section list.
    pub fn new(sections: Vec<CourseSection>) -> Self {
        Self { sections }
    }

    /// Loads a catalog from a JSON array of sections.
    pub fn from_json_file(path: &Path) -> Result<Self, PlannerError> {
        let content = fs::read_to_string(path).map_err(|source| PlannerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let sections: Vec<CourseSection> =
            serde_json::from_str(&content).map_err(|source| PlannerError::MalformedJson {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), sections = sections.len(), "loaded course catalog");
        Ok(Self::new(sections))
    }

    /// Loads a catalog from the scraper's CSV export.
    pub fn from_csv_file(path: &Path) -> Result<Self, PlannerError> {
        let mut reader =
            csv::Reader::from_path(path).map_err(|source| PlannerError::MalformedCsv {
                path: path.to_path_buf(),
                source,
            })?;

        let mut sections = Vec::new();
        for row in reader.deserialize() {
            let section: CourseSection = row.map_err(|source| PlannerError::MalformedCsv {
                path: path.to_path_buf(),
                source,
            })?;
            sections.push(section);
        }

        info!(path = %path.display(), sections = sections.len(), "loaded course catalog");
        Ok(Self::new(sections))
    }

    pub fn sections(&self) -> &[CourseSection] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// All sections offered for a course code.
    ///
    /// Codes compare with whitespace and case ignored. Exact matches win;
    /// if the code matches nothing exactly, sections whose code merely
    /// contains it are returned instead (catalog codes sometimes carry
    /// trailing qualifiers).
    pub fn sections_for(&self, code: &str) -> Vec<&CourseSection> {
        let wanted = normalize_code(code);
        if wanted.is_empty() {
            return Vec::new();
        }

        let exact: Vec<&CourseSection> = self
            .sections
            .iter()
            .filter(|s| normalize_code(&s.code) == wanted)
            .collect();
        if !exact.is_empty() {
            return exact;
        }

        self.sections
            .iter()
            .filter(|s| s.matches_code(code))
            .collect()
    }

    /// Free-text search over course code and instructor.
    pub fn search(&self, query: &str) -> Vec<&CourseSection> {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.sections
            .iter()
            .filter(|s| {
                s.code.to_ascii_lowercase().contains(&query)
                    || s.instructor.to_ascii_lowercase().contains(&query)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CourseSection {
                code: "CIS 251".to_string(),
                section: "M001".to_string(),
                instructor: "Smith".to_string(),
                ..Default::default()
            },
            CourseSection {
                code: "CIS 251".to_string(),
                section: "M002".to_string(),
                instructor: "Jones".to_string(),
                ..Default::default()
            },
            CourseSection {
                code: "CIS 252 Lab".to_string(),
                section: "M001".to_string(),
                instructor: "Smith".to_string(),
                ..Default::default()
            },
        ])
    }

    #[test]
    fn test_sections_for_prefers_exact_matches() {
        let catalog = catalog();
        let sections = catalog.sections_for("cis251");
        assert_eq!(sections.len(), 2);
        assert!(sections.iter().all(|s| s.code == "CIS 251"));
    }

    #[test]
    fn test_sections_for_falls_back_to_substring() {
        let catalog = catalog();
        let sections = catalog.sections_for("CIS 252");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].code, "CIS 252 Lab");
    }

    #[test]
    fn test_sections_for_unknown_code_is_empty() {
        assert!(catalog().sections_for("BIO 121").is_empty());
        assert!(catalog().sections_for("  ").is_empty());
    }

    #[test]
    fn test_search_matches_code_and_instructor() {
        let catalog = catalog();
        assert_eq!(catalog.search("cis").len(), 3);
        assert_eq!(catalog.search("jones").len(), 1);
        assert!(catalog.search("").is_empty());
    }

    #[test]
    fn test_catalog_json_shape() {
        let json = r#"[
            {"Class": "CIS 251", "Section": "M001", "DaysTimes": "MoWe 9:30AM - 10:50AM",
             "Room": "Link 105", "Instructor": "Smith"},
            {"Class": "IND 101", "Section": "M001", "DaysTimes": ""}
        ]"#;
        let sections: Vec<CourseSection> = serde_json::from_str(json).unwrap();
        let catalog = Catalog::new(sections);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.sections()[0].meeting_time, "MoWe 9:30AM - 10:50AM");
        assert_eq!(catalog.sections()[1].room, "");
    }

    #[test]
    fn test_catalog_csv_shape() {
        let csv_data = "\
Class,Section,DaysTimes,Room,Instructor
CIS 251,M001,MoWe 9:30AM - 10:50AM,Link 105,Smith
IND 101,M001,TBA,,
";
        let mut reader = csv::Reader::from_reader(csv_data.as_bytes());
        let sections: Vec<CourseSection> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].code, "CIS 251");
        assert_eq!(sections[1].meeting_time, "TBA");
    }
}
