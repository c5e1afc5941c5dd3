//! Overlap Matcher — partitions a job's declared skills into matched and missing.

use std::collections::HashSet;

use crate::matching::normalizer::{SkillSet, SkillToken};

/// A job's skills after normalization, in the order the job author declared them.
///
/// Duplicate declarations keep their first position. A skill declared as both
/// required and preferred is kept only as required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSkills {
    pub required: Vec<SkillToken>,
    pub preferred: Vec<SkillToken>,
}

impl JobSkills {
    pub fn from_declared<S: AsRef<str>>(required: &[S], preferred: &[S]) -> Self {
        let mut seen = HashSet::new();
        let required = ordered_unique(required, &mut seen);
        let preferred = ordered_unique(preferred, &mut seen);
        JobSkills {
            required,
            preferred,
        }
    }
}

fn ordered_unique<S: AsRef<str>>(raw: &[S], seen: &mut HashSet<SkillToken>) -> Vec<SkillToken> {
    raw.iter()
        .filter_map(|s| SkillToken::parse(s.as_ref()))
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

/// Matched / missing partitions for one (candidate, job) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillOverlap {
    pub matched_required: Vec<SkillToken>,
    pub missing_required: Vec<SkillToken>,
    pub matched_preferred: Vec<SkillToken>,
    pub missing_preferred: Vec<SkillToken>,
}

/// Stable filter of the job's skill lists against the candidate set.
pub fn compute_overlap(candidate: &SkillSet, job: &JobSkills) -> SkillOverlap {
    let (matched_required, missing_required) = partition(candidate, &job.required);
    let (matched_preferred, missing_preferred) = partition(candidate, &job.preferred);

    SkillOverlap {
        matched_required,
        missing_required,
        matched_preferred,
        missing_preferred,
    }
}

fn partition(candidate: &SkillSet, declared: &[SkillToken]) -> (Vec<SkillToken>, Vec<SkillToken>) {
    declared
        .iter()
        .cloned()
        .partition(|token| candidate.contains(token))
}
