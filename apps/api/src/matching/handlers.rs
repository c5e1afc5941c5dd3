//! Axum route handlers for skill extraction and job matching.

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::filter_by_company;
use crate::errors::AppError;
use crate::matching::normalizer::{normalize, SkillSet, SkillToken};
use crate::matching::rank_jobs_concurrent;
use crate::models::job::{deserialize_skill_list, JobRequirement};
use crate::models::match_result::MatchResult;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: Vec<String>,
    pub extractor_backend: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default, deserialize_with = "deserialize_skill_list")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub company_id: Option<u64>,
    /// Overrides the loaded catalog for this request.
    #[serde(default)]
    pub jobs: Option<Vec<JobRequirement>>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    #[serde(default)]
    pub company_id: Option<u64>,
    #[serde(default)]
    pub jobs: Option<Vec<JobRequirement>>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub candidate_skills: Vec<SkillToken>,
    pub matches: Vec<MatchResult>,
    pub total_jobs_analyzed: usize,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub extracted_skills: Vec<String>,
    #[serde(flatten)]
    pub report: MatchResponse,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills/extract
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    payload: Result<Json<ExtractSkillsRequest>, JsonRejection>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    let Json(request) = payload?;
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }

    let skills = state.extractor.extract(&request.resume_text);

    Ok(Json(ExtractSkillsResponse {
        skills,
        extractor_backend: state.extractor.backend().to_string(),
    }))
}

/// POST /api/v1/match
///
/// Ranks the catalog (or the jobs supplied in the body) against a known skill list.
pub async fn handle_match(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<MatchResponse>, AppError> {
    let Json(request) = payload?;
    let jobs = resolve_jobs(&state, request.jobs, request.company_id);
    let report = run_match(&state, normalize(&request.skills), jobs).await?;
    Ok(Json(report))
}

/// POST /api/v1/analyze
///
/// Full pipeline: extract skills from resume text → match → rank.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload?;
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }

    let extracted_skills = state.extractor.extract(&request.resume_text);
    let jobs = resolve_jobs(&state, request.jobs, request.company_id);
    let report = run_match(&state, normalize(&extracted_skills), jobs).await?;

    Ok(Json(AnalyzeResponse {
        extracted_skills,
        report,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn resolve_jobs(
    state: &AppState,
    supplied: Option<Vec<JobRequirement>>,
    company_id: Option<u64>,
) -> Vec<JobRequirement> {
    match supplied {
        Some(jobs) => filter_by_company(&jobs, company_id),
        None => state.catalog.jobs_for(company_id),
    }
}

async fn run_match(
    state: &AppState,
    candidate: SkillSet,
    jobs: Vec<JobRequirement>,
) -> Result<MatchResponse, AppError> {
    let total_jobs_analyzed = jobs.len();
    let candidate_skills = candidate.sorted();
    if candidate.is_empty() {
        debug!("Candidate has no recognised skills; scoring on empty coverage");
    }

    let matches = if total_jobs_analyzed >= state.config.parallel_match_threshold {
        rank_jobs_concurrent(
            Arc::clone(&state.engine),
            Arc::new(candidate),
            jobs,
            state.config.match_workers,
        )
        .await?
    } else {
        state.engine.rank_jobs(&candidate, &jobs)
    };

    let analysis_id = Uuid::new_v4();
    info!(
        %analysis_id,
        candidate_skills = candidate_skills.len(),
        jobs = total_jobs_analyzed,
        top_score = matches.first().map(|m| m.score),
        "Analysis complete"
    );

    Ok(MatchResponse {
        analysis_id,
        analyzed_at: Utc::now(),
        candidate_skills,
        matches,
        total_jobs_analyzed,
    })
}
