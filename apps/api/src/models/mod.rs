pub mod candidate;
pub mod location;
pub mod opening;

use std::collections::BTreeSet;

use crate::errors::MatchError;

/// Lowercases and trims skill labels, dropping empties and duplicates.
pub fn normalize_skills<I, S>(skills: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    skills
        .into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Rejects negative or non-finite year counts.
fn validate_years(field: &str, years: f64) -> Result<(), MatchError> {
    if !years.is_finite() || years < 0.0 {
        return Err(MatchError::InvalidRecord(format!(
            "{field} must be a finite value >= 0, got {years}"
        )));
    }
    Ok(())
}
