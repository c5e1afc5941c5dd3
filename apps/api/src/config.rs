use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use crate::matching::scorer::ScoringWeights;
use crate::matching::tips::{TipPolicy, DEFAULT_MAX_TIPS};
use crate::matching::MatchConfig;

/// Application configuration loaded from environment variables.
/// Startup fails if any variable is set to an unusable value.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub job_catalog_path: Option<PathBuf>,
    pub max_improvement_tips: usize,
    pub required_skill_weight: f64,
    pub preferred_skill_weight: f64,
    pub match_workers: usize,
    pub parallel_match_threshold: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);

        let config = Config {
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            job_catalog_path: std::env::var_os("JOB_CATALOG_PATH").map(PathBuf::from),
            max_improvement_tips: env_or("MAX_IMPROVEMENT_TIPS", DEFAULT_MAX_TIPS)?,
            required_skill_weight: env_or("REQUIRED_SKILL_WEIGHT", 70.0)?,
            preferred_skill_weight: env_or("PREFERRED_SKILL_WEIGHT", 30.0)?,
            match_workers: env_or("MATCH_WORKERS", default_workers)?,
            parallel_match_threshold: env_or("PARALLEL_MATCH_THRESHOLD", 256)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.weights().validate()?;
        if self.match_workers == 0 {
            return Err(anyhow!("MATCH_WORKERS must be at least 1"));
        }
        Ok(())
    }

    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights {
            required: self.required_skill_weight,
            preferred: self.preferred_skill_weight,
        }
    }

    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            weights: self.weights(),
            tips: TipPolicy {
                max_tips: self.max_improvement_tips,
            },
        }
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
