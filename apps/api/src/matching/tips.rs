//! Tip Generator — one actionable suggestion per missing required skill.

use serde::{Deserialize, Serialize};

use crate::matching::normalizer::SkillToken;

pub const DEFAULT_MAX_TIPS: usize = 5;

/// Bounds the tip list. The full gap stays visible via `missing_required`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipPolicy {
    pub max_tips: usize,
}

impl Default for TipPolicy {
    fn default() -> Self {
        Self {
            max_tips: DEFAULT_MAX_TIPS,
        }
    }
}

/// Emits tips in the job's declaration order, truncated to `policy.max_tips`.
/// Returns an empty list when nothing is missing.
pub fn generate_tips(missing_required: &[SkillToken], policy: &TipPolicy) -> Vec<String> {
    missing_required
        .iter()
        .take(policy.max_tips)
        .map(|skill| format!("Consider highlighting or acquiring: {skill}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<SkillToken> {
        raw.iter().filter_map(|s| SkillToken::parse(s)).collect()
    }

    #[test]
    fn test_one_tip_per_missing_skill() {
        let tips = generate_tips(&tokens(&["sql"]), &TipPolicy::default());
        assert_eq!(tips, vec!["Consider highlighting or acquiring: sql".to_string()]);
    }

    #[test]
    fn test_no_missing_skills_yields_no_tips() {
        assert!(generate_tips(&[], &TipPolicy::default()).is_empty());
    }

    #[test]
    fn test_tips_are_capped() {
        let missing = tokens(&["a", "b", "c", "d", "e", "f", "g"]);
        let tips = generate_tips(&missing, &TipPolicy { max_tips: 3 });
        assert_eq!(tips.len(), 3);
        assert!(tips[2].ends_with(": c"));
    }

    #[test]
    fn test_default_cap_is_five() {
        let missing = tokens(&["a", "b", "c", "d", "e", "f"]);
        assert_eq!(generate_tips(&missing, &TipPolicy::default()).len(), 5);
    }

    #[test]
    fn test_zero_cap_disables_tips() {
        let tips = generate_tips(&tokens(&["java"]), &TipPolicy { max_tips: 0 });
        assert!(tips.is_empty());
    }
}
