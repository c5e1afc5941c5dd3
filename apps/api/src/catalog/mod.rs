// Read-only job catalog loaded from a JSON file at startup.
// Handlers slice it per request and pass jobs to the engine explicitly.

pub mod handlers;

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::job::{JobRequirement, UNKNOWN_COMPANY};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    companies: Vec<Company>,
    #[serde(default)]
    jobs: Vec<JobRequirement>,
}

#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    companies: Vec<Company>,
    jobs: Vec<JobRequirement>,
}

impl JobCatalog {
    pub fn new(companies: Vec<Company>, jobs: Vec<JobRequirement>) -> Self {
        let by_id: HashMap<u64, &Company> = companies.iter().map(|c| (c.id, c)).collect();
        let jobs = jobs
            .into_iter()
            .map(|job| {
                let company = job.company_id.and_then(|id| by_id.get(&id).copied());
                attach_company(job, company)
            })
            .collect();

        Self { companies, jobs }
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(raw).context("Job catalog is not valid catalog JSON")?;
        Ok(Self::new(file.companies, file.jobs))
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read job catalog at '{}'", path.display()))?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            "Loaded job catalog: {} companies, {} jobs",
            catalog.companies.len(),
            catalog.jobs.len()
        );
        Ok(catalog)
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn company(&self, id: u64) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    /// All jobs, or only those of `company_id` when given. Clones, since each
    /// analysis request owns its slice of the catalog.
    pub fn jobs_for(&self, company_id: Option<u64>) -> Vec<JobRequirement> {
        filter_by_company(&self.jobs, company_id)
    }
}

pub fn filter_by_company(jobs: &[JobRequirement], company_id: Option<u64>) -> Vec<JobRequirement> {
    match company_id {
        Some(id) => jobs
            .iter()
            .filter(|job| job.company_id == Some(id))
            .cloned()
            .collect(),
        None => jobs.to_vec(),
    }
}

/// Fills company display fields the job entry left empty.
fn attach_company(mut job: JobRequirement, company: Option<&Company>) -> JobRequirement {
    let Some(company) = company else {
        return job;
    };
    if job.company_name.is_empty() || job.company_name == UNKNOWN_COMPANY {
        job.company_name = company.name.clone();
    }
    if job.company_logo.is_none() {
        job.company_logo = company.logo_url.clone();
    }
    if job.company_website.is_none() {
        job.company_website = company.website.clone();
    }
    job
}
