#![allow(dead_code)]

//! Extraction profile — the swappable skill taxonomy and duration markers.
//!
//! Nothing in here is inferred from data. Locale-specific tokens ("ans",
//! "mois") live in the default profile, not in the extractor.

use serde::{Deserialize, Serialize};

/// Skill labels recognised out of the box.
pub const DEFAULT_TAXONOMY: &[&str] = &[
    "python",
    "java",
    "sql",
    "machine learning",
    "react",
    "aws",
    "excel",
];

/// Unit a duration marker expresses. The extracted integer is converted to years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    Years,
    Months,
}

impl DurationUnit {
    pub fn to_years(self, value: f64) -> f64 {
        match self {
            DurationUnit::Years => value,
            DurationUnit::Months => value / 12.0,
        }
    }
}

/// A token that, directly after an integer, marks that integer as experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationMarker {
    pub marker: String,
    pub unit: DurationUnit,
}

impl DurationMarker {
    pub fn new(marker: &str, unit: DurationUnit) -> Self {
        Self {
            marker: marker.to_lowercase(),
            unit,
        }
    }
}

/// Taxonomy plus duration markers handed to the extractor at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionProfile {
    pub taxonomy: Vec<String>,
    pub duration_markers: Vec<DurationMarker>,
}

impl Default for ExtractionProfile {
    fn default() -> Self {
        Self {
            taxonomy: DEFAULT_TAXONOMY.iter().map(|s| s.to_string()).collect(),
            duration_markers: vec![
                DurationMarker::new("ans", DurationUnit::Years),
                DurationMarker::new("years", DurationUnit::Years),
                DurationMarker::new("+", DurationUnit::Years),
            ],
        }
    }
}

impl ExtractionProfile {
    /// Replaces the taxonomy, normalizing labels the same way records do.
    pub fn with_taxonomy<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.taxonomy = crate::models::normalize_skills(labels).into_iter().collect();
        self
    }

    pub fn with_duration_markers(mut self, markers: Vec<DurationMarker>) -> Self {
        self.duration_markers = markers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_has_reference_taxonomy() {
        let profile = ExtractionProfile::default();
        assert_eq!(profile.taxonomy.len(), DEFAULT_TAXONOMY.len());
        assert!(profile.taxonomy.iter().any(|s| s == "machine learning"));
    }

    #[test]
    fn test_default_markers_are_all_years() {
        let profile = ExtractionProfile::default();
        assert!(profile
            .duration_markers
            .iter()
            .all(|m| m.unit == DurationUnit::Years));
    }

    #[test]
    fn test_with_taxonomy_normalizes_labels() {
        let profile = ExtractionProfile::default().with_taxonomy(["Rust", " Go ", "rust"]);
        assert_eq!(profile.taxonomy, vec!["go".to_string(), "rust".to_string()]);
    }

    #[test]
    fn test_months_convert_to_years() {
        assert!((DurationUnit::Months.to_years(18.0) - 1.5).abs() < f64::EPSILON);
        assert_eq!(DurationUnit::Years.to_years(4.0), 4.0);
    }
}
