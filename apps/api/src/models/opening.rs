#![allow(dead_code)]

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::MatchError;
use crate::models::location::Location;
use crate::models::{normalize_skills, validate_years};

/// A job opening candidates are matched against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpeningRecord {
    id: String,
    title: String,
    required_skills: BTreeSet<String>,
    min_experience_years: f64,
    location: Location,
    remote_allowed: bool,
}

impl OpeningRecord {
    pub fn new<I, S>(
        id: impl Into<String>,
        title: impl Into<String>,
        required_skills: I,
        min_experience_years: f64,
        location: Location,
        remote_allowed: bool,
    ) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        validate_years("min_experience_years", min_experience_years)?;

        Ok(Self {
            id: id.into(),
            title: title.into(),
            required_skills: normalize_skills(required_skills),
            min_experience_years,
            location,
            remote_allowed,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn required_skills(&self) -> &BTreeSet<String> {
        &self.required_skills
    }

    pub fn min_experience_years(&self) -> f64 {
        self.min_experience_years
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn remote_allowed(&self) -> bool {
        self.remote_allowed
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpeningInput {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub min_experience_years: f64,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub remote_allowed: bool,
}

impl TryFrom<OpeningInput> for OpeningRecord {
    type Error = MatchError;

    fn try_from(input: OpeningInput) -> Result<Self, Self::Error> {
        OpeningRecord::new(
            input.id,
            input.title,
            input.required_skills,
            input.min_experience_years,
            input.location,
            input.remote_allowed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_skills_are_normalized() {
        let opening = OpeningRecord::new(
            "JOB",
            "Developer",
            ["Python", "Machine Learning ", "python"],
            3.0,
            Location::Paris,
            true,
        )
        .unwrap();

        assert_eq!(opening.required_skills().len(), 2);
        assert!(opening.required_skills().contains("python"));
        assert!(opening.required_skills().contains("machine learning"));
    }

    #[test]
    fn test_negative_minimum_is_rejected() {
        let result = OpeningRecord::new(
            "JOB",
            "Developer",
            Vec::<String>::new(),
            -0.5,
            Location::Paris,
            false,
        );
        assert!(matches!(result, Err(MatchError::InvalidRecord(_))));
    }

    #[test]
    fn test_input_deserializes_with_defaults() {
        let input: OpeningInput =
            serde_json::from_str(r#"{"id": "J1", "title": "Data Scientist"}"#).unwrap();
        let opening = OpeningRecord::try_from(input).unwrap();

        assert!(opening.required_skills().is_empty());
        assert_eq!(opening.min_experience_years(), 0.0);
        assert!(!opening.remote_allowed());
    }
}
