//! Match scoring — pluggable, trait-based scorer comparing one candidate with one opening.
//!
//! Default: `WeightedScorer` (rule-based, deterministic, fully testable).
//!
//! `AppState` holds an `Arc<dyn Scorer>`; a request may swap in its own
//! weight profile for a single call.

use std::collections::HashMap;

use serde::Serialize;

use crate::errors::MatchError;
use crate::matching::weights::WeightProfile;
use crate::models::candidate::CandidateRecord;
use crate::models::opening::OpeningRecord;

/// Sub-scores, each in `[0.0, 1.0]`, before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
}

/// The scorer trait. Implement this to swap backends without touching the
/// ranker or the handlers.
pub trait Scorer: Send + Sync {
    fn score_breakdown(
        &self,
        candidate: &CandidateRecord,
        opening: &OpeningRecord,
    ) -> Result<ScoreBreakdown, MatchError>;

    /// Weights an already computed breakdown into the 0–100 aggregate,
    /// rounded to two decimals.
    fn aggregate(&self, breakdown: &ScoreBreakdown) -> f64;

    fn compute_match(
        &self,
        candidate: &CandidateRecord,
        opening: &OpeningRecord,
    ) -> Result<f64, MatchError> {
        self.score_breakdown(candidate, opening)
            .map(|breakdown| self.aggregate(&breakdown))
    }

    fn explain_score(
        &self,
        candidate: &CandidateRecord,
        opening: &OpeningRecord,
        score: f64,
    ) -> String {
        explain_score(candidate, opening, score)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedScorer — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Weighted sum of skill recall, experience ratio and location compatibility.
///
/// score = 100 × (skills × w_skills + experience × w_experience + location × w_location)
#[derive(Debug, Clone, Default)]
pub struct WeightedScorer {
    weights: WeightProfile,
}

impl WeightedScorer {
    /// Validates the profile once here, so scoring calls never see a bad one.
    pub fn new(weights: WeightProfile) -> Result<Self, MatchError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn from_map(weights: &HashMap<String, f64>) -> Result<Self, MatchError> {
        WeightProfile::from_map(weights).and_then(Self::new)
    }
}

impl Scorer for WeightedScorer {
    fn score_breakdown(
        &self,
        candidate: &CandidateRecord,
        opening: &OpeningRecord,
    ) -> Result<ScoreBreakdown, MatchError> {
        Ok(ScoreBreakdown {
            skills: skill_score(candidate, opening),
            experience: experience_score(
                candidate.experience_years(),
                opening.min_experience_years(),
            ),
            location: location_score(candidate, opening),
        })
    }

    fn aggregate(&self, b: &ScoreBreakdown) -> f64 {
        let w = &self.weights;
        let raw = b.skills * w.skills + b.experience * w.experience + b.location * w.location;
        round_two_decimals(raw * 100.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sub-scores
// ────────────────────────────────────────────────────────────────────────────

/// Recall over the required skills. Extra candidate skills neither help nor hurt.
pub fn skill_score(candidate: &CandidateRecord, opening: &OpeningRecord) -> f64 {
    let required = opening.required_skills();
    if required.is_empty() {
        return 1.0;
    }
    let matched = required.intersection(candidate.skills()).count();
    matched as f64 / required.len() as f64
}

/// 1.0 once the minimum is met, linear below it. A zero minimum always takes
/// the first branch, so there is no division by zero.
pub fn experience_score(candidate_years: f64, required_years: f64) -> f64 {
    if candidate_years >= required_years {
        return 1.0;
    }
    (candidate_years / required_years).max(0.0)
}

pub fn location_score(candidate: &CandidateRecord, opening: &OpeningRecord) -> f64 {
    if candidate
        .location()
        .is_compatible_with(opening.location(), opening.remote_allowed())
    {
        1.0
    } else {
        0.0
    }
}

/// Rounds on the exact decimal expansion of `value`. Scaling by 100 first
/// would add an error that can push a value just under .xx5 upwards.
fn round_two_decimals(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

// ────────────────────────────────────────────────────────────────────────────
// Explanation
// ────────────────────────────────────────────────────────────────────────────

/// Fixed-template explanation: score band, missing skills, experience shortfall.
/// Band lower bounds are exclusive, so exactly 80 is an acceptable match.
pub fn explain_score(candidate: &CandidateRecord, opening: &OpeningRecord, score: f64) -> String {
    let mut explanation = format!("Score: {score:.2}/100. ");

    explanation.push_str(if score > 80.0 {
        "Excellent match."
    } else if score > 50.0 {
        "Acceptable match."
    } else {
        "Weak match."
    });

    let missing: Vec<&str> = opening
        .required_skills()
        .difference(candidate.skills())
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        explanation.push_str(&format!(" Missing skills: {}.", missing.join(", ")));
    }

    if candidate.experience_years() < opening.min_experience_years() {
        explanation.push_str(&format!(
            " Insufficient experience ({} years vs {} required).",
            candidate.experience_years(),
            opening.min_experience_years()
        ));
    }

    explanation
}
