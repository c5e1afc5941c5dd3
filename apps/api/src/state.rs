use std::sync::Arc;

use crate::catalog::JobCatalog;
use crate::config::Config;
use crate::extraction::SkillExtractor;
use crate::matching::MatchEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub engine: Arc<MatchEngine>,
    /// Pluggable skill extractor. Default: KeywordSkillExtractor.
    pub extractor: Arc<dyn SkillExtractor>,
    /// Loaded from JOB_CATALOG_PATH; empty when unset.
    pub catalog: Arc<JobCatalog>,
}
