use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::errors::MatchError;
use crate::extraction::extractor::Extractor;
use crate::matching::ranker::Ranker;
use crate::matching::scorer::{Scorer, WeightedScorer};

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub extractor: Arc<Extractor>,
    /// Pluggable scorer. Default: WeightedScorer with the configured weights.
    pub scorer: Arc<dyn Scorer>,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self> {
        let extractor = Extractor::new(config.extraction.clone())?;
        let scorer = WeightedScorer::new(config.weights)?;

        Ok(AppState {
            config,
            extractor: Arc::new(extractor),
            scorer: Arc::new(scorer),
        })
    }

    /// The shared scorer, or a one-off scorer when the request brings its own weights.
    pub fn scorer_for(
        &self,
        weights: Option<&HashMap<String, f64>>,
    ) -> Result<Arc<dyn Scorer>, MatchError> {
        match weights {
            Some(map) => Ok(Arc::new(WeightedScorer::from_map(map)?)),
            None => Ok(Arc::clone(&self.scorer)),
        }
    }

    pub fn ranker_for(&self, weights: Option<&HashMap<String, f64>>) -> Result<Ranker, MatchError> {
        self.scorer_for(weights).map(Ranker::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::weights::WeightProfile;

    fn config(weights: WeightProfile) -> Config {
        let mut config = Config::from_lookup(|_: &str| None).unwrap();
        config.weights = weights;
        config
    }

    #[test]
    fn test_from_config_rejects_nan_weight() {
        let weights = WeightProfile {
            location: f64::NAN,
            ..WeightProfile::default()
        };
        assert!(AppState::from_config(config(weights)).is_err());
    }

    #[test]
    fn test_from_config_with_defaults() {
        assert!(AppState::from_config(config(WeightProfile::default())).is_ok());
    }
}
