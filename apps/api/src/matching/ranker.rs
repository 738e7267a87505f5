use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::errors::MatchError;
use crate::matching::scorer::{ScoreBreakdown, Scorer};
use crate::models::candidate::CandidateRecord;
use crate::models::opening::OpeningRecord;

/// One ranked candidate. Built per call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub candidate_id: String,
    pub candidate_name: String,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub explanation: String,
}

/// Scores a candidate pool against one opening and keeps the best `top_k`.
#[derive(Clone)]
pub struct Ranker {
    scorer: Arc<dyn Scorer>,
}

impl Ranker {
    pub fn new(scorer: Arc<dyn Scorer>) -> Self {
        Self { scorer }
    }

    /// Returns at most `top_k` results, best first. Equal scores keep their
    /// input order. A scoring error on any candidate fails the whole call.
    pub fn rank(
        &self,
        opening: &OpeningRecord,
        candidates: &[CandidateRecord],
        top_k: usize,
    ) -> Result<Vec<MatchResult>, MatchError> {
        if top_k == 0 || candidates.is_empty() {
            return Ok(Vec::new());
        }

        let mut results = candidates
            .iter()
            .map(|candidate| self.score_one(candidate, opening))
            .collect::<Result<Vec<_>, _>>()?;

        // sort_by is stable
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(top_k);

        debug!(
            opening_id = opening.id(),
            pool = candidates.len(),
            returned = results.len(),
            "Ranked candidates"
        );

        Ok(results)
    }

    fn score_one(
        &self,
        candidate: &CandidateRecord,
        opening: &OpeningRecord,
    ) -> Result<MatchResult, MatchError> {
        let breakdown = self.scorer.score_breakdown(candidate, opening)?;
        let score = self.scorer.aggregate(&breakdown);
        let explanation = self.scorer.explain_score(candidate, opening, score);

        Ok(MatchResult {
            candidate_id: candidate.id().to_string(),
            candidate_name: candidate.name().to_string(),
            score,
            breakdown,
            explanation,
        })
    }
}
