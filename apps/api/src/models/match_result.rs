use serde::Serialize;

use crate::matching::gaps::SkillGaps;
use crate::matching::normalizer::SkillToken;
use crate::matching::scorer::ScoreBreakdown;
use crate::models::job::JobRequirement;

/// Compatibility report for one (candidate, job) pair. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub job_id: u64,
    pub company_id: Option<u64>,
    pub company_name: String,
    pub company_logo: Option<String>,
    pub company_website: Option<String>,
    pub job_title: String,
    pub job_description: String,
    pub location: Option<String>,
    pub salary_range: Option<String>,
    pub experience_level: String,
    pub score: f64,
    pub required_coverage: f64,
    pub preferred_coverage: f64,
    pub matched_required: Vec<SkillToken>,
    pub missing_required: Vec<SkillToken>,
    pub matched_preferred: Vec<SkillToken>,
    pub missing_preferred: Vec<SkillToken>,
    pub total_required: usize,
    pub total_preferred: usize,
    pub tips: Vec<String>,
}

impl MatchResult {
    pub fn assemble(
        job: &JobRequirement,
        breakdown: ScoreBreakdown,
        gaps: SkillGaps,
        tips: Vec<String>,
    ) -> Self {
        MatchResult {
            job_id: job.id,
            company_id: job.company_id,
            company_name: job.company_name.clone(),
            company_logo: job.company_logo.clone(),
            company_website: job.company_website.clone(),
            job_title: job.title.clone(),
            job_description: job.description.clone(),
            location: job.location.clone(),
            salary_range: job.salary_range.clone(),
            experience_level: job.experience_level.clone(),
            score: breakdown.score,
            required_coverage: breakdown.required_coverage,
            preferred_coverage: breakdown.preferred_coverage,
            matched_required: gaps.matched_required,
            missing_required: gaps.missing_required,
            matched_preferred: gaps.matched_preferred,
            missing_preferred: gaps.missing_preferred,
            total_required: gaps.total_required,
            total_preferred: gaps.total_preferred,
            tips,
        }
    }
}
