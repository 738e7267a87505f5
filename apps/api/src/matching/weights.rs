use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::MatchError;

pub const SKILLS_KEY: &str = "skills";
pub const EXPERIENCE_KEY: &str = "experience";
pub const LOCATION_KEY: &str = "location";

/// Weight of each sub-score in the aggregate.
///
/// The weights are not required to sum to 1.0. Callers that want the aggregate
/// to read as a true percentage must supply weights that do.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightProfile {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
}

impl Default for WeightProfile {
    fn default() -> Self {
        Self {
            skills: 0.5,
            experience: 0.3,
            location: 0.2,
        }
    }
}

impl WeightProfile {
    /// Builds a profile from a key → weight map. All three keys are required;
    /// unknown keys are ignored.
    pub fn from_map(weights: &HashMap<String, f64>) -> Result<Self, MatchError> {
        let profile = Self {
            skills: required_weight(weights, SKILLS_KEY)?,
            experience: required_weight(weights, EXPERIENCE_KEY)?,
            location: required_weight(weights, LOCATION_KEY)?,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Every weight must be finite and non-negative.
    pub fn validate(&self) -> Result<(), MatchError> {
        for (key, value) in [
            (SKILLS_KEY, self.skills),
            (EXPERIENCE_KEY, self.experience),
            (LOCATION_KEY, self.location),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MatchError::InvalidConfiguration(format!(
                    "weight '{key}' must be a finite value >= 0, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.location
    }
}

fn required_weight(weights: &HashMap<String, f64>, key: &str) -> Result<f64, MatchError> {
    weights
        .get(key)
        .copied()
        .ok_or_else(|| MatchError::InvalidConfiguration(format!("missing weight '{key}'")))
}

/// Parses `skills=0.5,experience=0.3,location=0.2` into a weight map.
pub fn parse_weight_list(raw: &str) -> Result<HashMap<String, f64>, MatchError> {
    raw.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                MatchError::InvalidConfiguration(format!("expected key=value, got '{pair}'"))
            })?;
            let value = value.trim().parse::<f64>().map_err(|_| {
                MatchError::InvalidConfiguration(format!("weight '{}' is not a number", key.trim()))
            })?;
            Ok((key.trim().to_lowercase(), value))
        })
        .collect()
}
