use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::catalog::Company;
use crate::errors::AppError;
use crate::models::job::JobRequirement;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CompanyFilter {
    pub company_id: Option<u64>,
}

/// GET /api/v1/companies
pub async fn handle_list_companies(State(state): State<AppState>) -> Json<Vec<Company>> {
    Json(state.catalog.companies().to_vec())
}

/// GET /api/v1/companies/:id
pub async fn handle_get_company(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Company>, AppError> {
    state
        .catalog
        .company(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Company {id} not found")))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(filter): Query<CompanyFilter>,
) -> Json<Vec<JobRequirement>> {
    Json(state.catalog.jobs_for(filter.company_id))
}
