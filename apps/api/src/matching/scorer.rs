use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::matching::overlap::SkillOverlap;

/// Points awarded for full coverage of each skill tier. Must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub required: f64,
    pub preferred: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            required: 70.0,
            preferred: 30.0,
        }
    }
}

impl ScoringWeights {
    /// Rejects weights that could push a score outside 0–100.
    pub fn validate(&self) -> Result<()> {
        let finite = self.required.is_finite() && self.preferred.is_finite();
        if !finite || self.required < 0.0 || self.preferred < 0.0 {
            bail!(
                "skill weights must be non-negative numbers (required={}, preferred={})",
                self.required,
                self.preferred
            );
        }
        let total = self.required + self.preferred;
        if (total - 100.0).abs() > 1e-9 {
            bail!("skill weights must sum to 100, got {total}");
        }
        Ok(())
    }
}

/// Score plus the per-tier coverage it was built from. All values are 0–100
/// rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub score: f64,
    pub required_coverage: f64,
    pub preferred_coverage: f64,
}

/// score = w_req * required_coverage + w_pref * preferred_coverage
///
/// An empty required tier counts as fully covered. An empty preferred tier
/// contributes nothing, unless the job declares no skills at all, in which
/// case it scores 100.
pub fn compute_score(overlap: &SkillOverlap, weights: &ScoringWeights) -> ScoreBreakdown {
    let total_required = overlap.matched_required.len() + overlap.missing_required.len();
    let total_preferred = overlap.matched_preferred.len() + overlap.missing_preferred.len();

    let required = if total_required == 0 {
        1.0
    } else {
        overlap.matched_required.len() as f64 / total_required as f64
    };
    let preferred = match (total_required, total_preferred) {
        (0, 0) => 1.0,
        (_, 0) => 0.0,
        (_, n) => overlap.matched_preferred.len() as f64 / n as f64,
    };
    let raw = weights.required * required + weights.preferred * preferred;

    ScoreBreakdown {
        score: round_to_tenth(raw.clamp(0.0, 100.0)),
        required_coverage: round_to_tenth(required * 100.0),
        preferred_coverage: round_to_tenth(preferred * 100.0),
    }
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
