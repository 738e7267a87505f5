use anyhow::{Context, Result};

use crate::extraction::profile::ExtractionProfile;
use crate::matching::weights::{parse_weight_list, WeightProfile};

/// Application configuration loaded from environment variables.
/// Every variable is optional; a malformed one fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub weights: WeightProfile,
    pub extraction: ExtractionProfile,
    pub default_top_k: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let weights = match lookup("MATCH_WEIGHTS") {
            Some(raw) => {
                let map = parse_weight_list(&raw).context("MATCH_WEIGHTS is malformed")?;
                WeightProfile::from_map(&map).context("MATCH_WEIGHTS is incomplete")?
            }
            None => WeightProfile::default(),
        };

        let extraction = match lookup("SKILL_TAXONOMY") {
            Some(raw) => ExtractionProfile::default().with_taxonomy(raw.split(',')),
            None => ExtractionProfile::default(),
        };

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            weights,
            extraction,
            default_top_k: lookup("DEFAULT_TOP_K")
                .unwrap_or_else(|| "5".to_string())
                .parse::<usize>()
                .context("DEFAULT_TOP_K must be a non-negative integer")?,
        })
    }
}
