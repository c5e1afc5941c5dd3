// Matching & Scoring Engine.
// Pipeline per job: overlap → {score, gaps} → tips; then one ranking pass.
// Stateless: the candidate skills and job catalog are passed in on every call.

pub mod gaps;
pub mod handlers;
pub mod normalizer;
pub mod overlap;
pub mod ranker;
pub mod scorer;
pub mod tips;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::task::JoinSet;
use tracing::debug;

use crate::matching::gaps::SkillGaps;
use crate::matching::normalizer::SkillSet;
use crate::matching::overlap::{compute_overlap, JobSkills};
use crate::matching::scorer::{compute_score, ScoringWeights};
use crate::matching::tips::{generate_tips, TipPolicy};
use crate::models::job::JobRequirement;
use crate::models::match_result::MatchResult;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MatchConfig {
    pub weights: ScoringWeights,
    pub tips: TipPolicy,
}

/// Scores and ranks a candidate against a job catalog.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: MatchConfig,
}

impl MatchEngine {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Builds the full match report for a single job.
    pub fn evaluate(&self, candidate: &SkillSet, job: &JobRequirement) -> MatchResult {
        let skills = JobSkills::from_declared(&job.required_skills, &job.preferred_skills);
        let overlap = compute_overlap(candidate, &skills);
        let breakdown = compute_score(&overlap, &self.config.weights);
        let gaps = SkillGaps::from_overlap(overlap);
        let tips = if gaps.is_fully_covered() {
            Vec::new()
        } else {
            generate_tips(&gaps.missing_required, &self.config.tips)
        };

        MatchResult::assemble(job, breakdown, gaps, tips)
    }

    pub fn rank_jobs(&self, candidate: &SkillSet, jobs: &[JobRequirement]) -> Vec<MatchResult> {
        debug!(
            jobs = jobs.len(),
            candidate_skills = candidate.len(),
            "Ranking jobs"
        );
        let results = jobs.iter().map(|job| self.evaluate(candidate, job)).collect();
        ranker::rank(results)
    }
}

/// Same output as [`MatchEngine::rank_jobs`], with scoring spread over up to
/// `workers` blocking tasks. Chunk results are reassembled in catalog order
/// before ranking, so worker completion order never shows in the output.
pub async fn rank_jobs_concurrent(
    engine: Arc<MatchEngine>,
    candidate: Arc<SkillSet>,
    mut jobs: Vec<JobRequirement>,
    workers: usize,
) -> Result<Vec<MatchResult>> {
    let total = jobs.len();
    let chunk_size = total.div_ceil(workers.max(1)).max(1);
    debug!(jobs = total, workers, chunk_size, "Scoring jobs concurrently");

    let mut set = JoinSet::new();
    let mut chunk_index = 0usize;
    while !jobs.is_empty() {
        let rest = jobs.split_off(chunk_size.min(jobs.len()));
        let chunk = std::mem::replace(&mut jobs, rest);
        let engine = Arc::clone(&engine);
        let candidate = Arc::clone(&candidate);
        let index = chunk_index;
        set.spawn_blocking(move || {
            let scored: Vec<MatchResult> = chunk
                .iter()
                .map(|job| engine.evaluate(&candidate, job))
                .collect();
            (index, scored)
        });
        chunk_index += 1;
    }

    let mut chunks = Vec::with_capacity(chunk_index);
    while let Some(joined) = set.join_next().await {
        chunks.push(joined.context("match worker failed")?);
    }
    chunks.sort_by_key(|(index, _)| *index);

    let results = chunks.into_iter().flat_map(|(_, scored)| scored).collect();
    Ok(ranker::rank(results))
}
