//! Attribute extractor — turns free résumé text into a `CandidateRecord`.
//!
//! All heuristics are keyword based and never fail: text with nothing
//! recognisable degrades to 0 years, no skills, Paris and available.

use std::collections::BTreeSet;

use regex::Regex;
use tracing::debug;

use crate::errors::MatchError;
use crate::extraction::profile::{DurationMarker, ExtractionProfile};
use crate::models::candidate::CandidateRecord;
use crate::models::location::Location;

/// Phrases signalling the candidate is not free to start right away.
const NOTICE_MARKERS: &[&str] = &[
    "préavis",
    "notice period",
    "available from",
    "disponible à partir",
];

pub struct Extractor {
    profile: ExtractionProfile,
    /// `None` when the profile has no duration markers.
    duration_pattern: Option<Regex>,
}

impl Extractor {
    pub fn new(profile: ExtractionProfile) -> Result<Self, MatchError> {
        let duration_pattern = compile_duration_pattern(&profile.duration_markers)?;
        Ok(Self {
            profile,
            duration_pattern,
        })
    }

    /// Returns the integer in front of the first duration marker, converted to
    /// years. Later mentions are ignored; 0.0 when there is none.
    pub fn extract_experience_years(&self, text: &str) -> f64 {
        let Some(pattern) = &self.duration_pattern else {
            return 0.0;
        };
        let Some(caps) = pattern.captures(text) else {
            return 0.0;
        };

        let value = caps[1].parse::<f64>().unwrap_or(0.0);
        let marker = caps[2].to_lowercase();
        let unit = self
            .profile
            .duration_markers
            .iter()
            .find(|m| m.marker.to_lowercase() == marker)
            .map(|m| m.unit);

        match unit {
            Some(unit) if value.is_finite() => unit.to_years(value),
            _ => 0.0,
        }
    }

    pub fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        extract_skills(text, self.profile.taxonomy.as_slice())
    }

    pub fn guess_location(&self, text: &str) -> Location {
        Location::guess(text)
    }

    pub fn detect_availability(&self, text: &str) -> bool {
        detect_availability(text)
    }

    /// Composes every extraction step into a full record. The extractor does
    /// no name recognition, so the name is always the placeholder.
    pub fn build_candidate(&self, text: &str, id: &str) -> CandidateRecord {
        let skills = self.extract_skills(text);
        let experience_years = self.extract_experience_years(text);
        let location = self.guess_location(text);
        let available_immediately = self.detect_availability(text);

        debug!(
            candidate_id = id,
            skills = skills.len(),
            experience_years,
            location = location.as_str(),
            "Extracted candidate attributes"
        );

        CandidateRecord::extracted(
            id,
            skills,
            experience_years,
            location,
            available_immediately,
            text,
        )
    }
}

/// Every taxonomy label contained in the text, compared case-insensitively.
pub fn extract_skills<S: AsRef<str>>(text: &str, taxonomy: &[S]) -> BTreeSet<String> {
    let text_lower = text.to_lowercase();
    taxonomy
        .iter()
        .map(|skill| skill.as_ref().trim().to_lowercase())
        .filter(|skill| !skill.is_empty() && text_lower.contains(skill.as_str()))
        .collect()
}

pub fn detect_availability(text: &str) -> bool {
    let text_lower = text.to_lowercase();
    !NOTICE_MARKERS.iter().any(|m| text_lower.contains(m))
}

/// Builds `(?i)([0-9]+)\s*(m1|m2|...)`, longest markers first so a longer
/// marker is never shadowed by one of its prefixes.
fn compile_duration_pattern(markers: &[DurationMarker]) -> Result<Option<Regex>, MatchError> {
    let mut tokens: Vec<&str> = markers
        .iter()
        .map(|m| m.marker.as_str())
        .filter(|m| !m.is_empty())
        .collect();
    if tokens.is_empty() {
        return Ok(None);
    }
    tokens.sort_by(|a, b| b.len().cmp(&a.len()));

    let alternation = tokens
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(r"(?i)([0-9]+)\s*({alternation})");

    Regex::new(&pattern)
        .map(Some)
        .map_err(|e| MatchError::InvalidConfiguration(format!("duration markers: {e}")))
}
