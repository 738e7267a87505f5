#![allow(dead_code)]

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::MatchError;
use crate::models::location::Location;
use crate::models::{normalize_skills, validate_years};

/// Display name used when no name could be recognised.
pub const UNKNOWN_CANDIDATE_NAME: &str = "Unknown Candidate";

/// A candidate profile. Skills are normalized once here, so every comparison
/// downstream is case-insensitive and duplicate-free.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateRecord {
    id: String,
    name: String,
    skills: BTreeSet<String>,
    experience_years: f64,
    location: Location,
    available_immediately: bool,
    raw_text: Option<String>,
}

impl CandidateRecord {
    pub fn new<I, S>(
        id: impl Into<String>,
        name: impl Into<String>,
        skills: I,
        experience_years: f64,
        location: Location,
        available_immediately: bool,
        raw_text: Option<String>,
    ) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        validate_years("experience_years", experience_years)?;

        Ok(Self {
            id: id.into(),
            name: name.into(),
            skills: normalize_skills(skills),
            experience_years,
            location,
            available_immediately,
            raw_text,
        })
    }

    /// Builds a record from extracted attributes. Extraction never fails, so an
    /// unusable experience figure degrades to 0 instead of erroring.
    pub fn extracted(
        id: impl Into<String>,
        skills: BTreeSet<String>,
        experience_years: f64,
        location: Location,
        available_immediately: bool,
        raw_text: &str,
    ) -> Self {
        let experience_years = if experience_years.is_finite() {
            experience_years.max(0.0)
        } else {
            0.0
        };

        Self {
            id: id.into(),
            name: UNKNOWN_CANDIDATE_NAME.to_string(),
            skills: normalize_skills(skills),
            experience_years,
            location,
            available_immediately,
            raw_text: Some(raw_text.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn skills(&self) -> &BTreeSet<String> {
        &self.skills
    }

    pub fn experience_years(&self) -> f64 {
        self.experience_years
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn available_immediately(&self) -> bool {
        self.available_immediately
    }

    pub fn raw_text(&self) -> Option<&str> {
        self.raw_text.as_deref()
    }
}

/// Inbound candidate payload. Converted with `TryFrom` so the record invariants
/// are checked on every request.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateInput {
    pub id: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience_years: f64,
    #[serde(default)]
    pub location: Location,
    #[serde(default = "default_available")]
    pub available_immediately: bool,
    #[serde(default)]
    pub raw_text: Option<String>,
}

fn default_name() -> String {
    UNKNOWN_CANDIDATE_NAME.to_string()
}

fn default_available() -> bool {
    true
}

impl TryFrom<CandidateInput> for CandidateRecord {
    type Error = MatchError;

    fn try_from(input: CandidateInput) -> Result<Self, Self::Error> {
        CandidateRecord::new(
            input.id,
            input.name,
            input.skills,
            input.experience_years,
            input.location,
            input.available_immediately,
            input.raw_text,
        )
    }
}
