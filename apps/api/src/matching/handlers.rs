use std::collections::HashMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::ranker::MatchResult;
use crate::matching::scorer::ScoreBreakdown;
use crate::models::candidate::{CandidateInput, CandidateRecord};
use crate::models::opening::{OpeningInput, OpeningRecord};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub candidate: CandidateInput,
    pub opening: OpeningInput,
    #[serde(default)]
    pub weights: Option<HashMap<String, f64>>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub explanation: String,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub opening: OpeningInput,
    #[serde(default)]
    pub candidates: Vec<CandidateInput>,
    /// Signed so that zero and negative values can be sent; both yield no results.
    #[serde(default)]
    pub top_k: Option<i64>,
    #[serde(default)]
    pub weights: Option<HashMap<String, f64>>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub opening_id: String,
    pub results: Vec<MatchResult>,
}

/// POST /api/v1/matches/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let scorer = state.scorer_for(req.weights.as_ref())?;
    let candidate = CandidateRecord::try_from(req.candidate)?;
    let opening = OpeningRecord::try_from(req.opening)?;

    let breakdown = scorer.score_breakdown(&candidate, &opening)?;
    let score = scorer.aggregate(&breakdown);
    let explanation = scorer.explain_score(&candidate, &opening, score);

    Ok(Json(ScoreResponse {
        score,
        breakdown,
        explanation,
    }))
}

/// POST /api/v1/matches/rank
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(req): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    let ranker = state.ranker_for(req.weights.as_ref())?;
    let opening = OpeningRecord::try_from(req.opening)?;
    let candidates = req
        .candidates
        .into_iter()
        .map(CandidateRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let top_k = match req.top_k {
        Some(k) => usize::try_from(k).unwrap_or(0),
        None => state.config.default_top_k,
    };

    let results = ranker.rank(&opening, &candidates, top_k)?;

    Ok(Json(RankResponse {
        opening_id: opening.id().to_string(),
        results,
    }))
}
