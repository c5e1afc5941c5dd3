pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route(
            "/api/v1/skills/extract",
            post(matching::handle_extract_skills),
        )
        .route("/api/v1/match", post(matching::handle_match))
        .route("/api/v1/analyze", post(matching::handle_analyze))
        // Catalog API (read-only)
        .route("/api/v1/companies", get(catalog::handle_list_companies))
        .route("/api/v1/companies/:id", get(catalog::handle_get_company))
        .route("/api/v1/jobs", get(catalog::handle_list_jobs))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::catalog::JobCatalog;
    use crate::config::Config;
    use crate::extraction::KeywordSkillExtractor;
    use crate::matching::MatchEngine;

    const CATALOG: &str = r#"{
        "companies": [
            {"id": 1, "name": "Acme", "logo_url": "https://acme.test/logo.png"},
            {"id": 2, "name": "Globex"}
        ],
        "jobs": [
            {"id": 1, "company_id": 1, "title": "Backend Engineer", "location": "Remote",
             "required_skills": ["Python", "SQL"], "preferred_skills": ["Docker"]},
            {"id": 2, "company_id": 1, "title": "Java Developer",
             "required_skills": ["Java"]},
            {"id": 3, "company_id": 2, "title": "Frontend Engineer",
             "required_skills": ["React", "TypeScript"], "preferred_skills": ["GraphQL"]}
        ]
    }"#;

    fn test_config(parallel_match_threshold: usize) -> Config {
        Config {
            port: 0,
            rust_log: "info".to_string(),
            job_catalog_path: None,
            max_improvement_tips: 5,
            required_skill_weight: 70.0,
            preferred_skill_weight: 30.0,
            match_workers: 2,
            parallel_match_threshold,
        }
    }

    fn app_with(parallel_match_threshold: usize) -> Router {
        let config = test_config(parallel_match_threshold);
        let state = AppState {
            engine: Arc::new(MatchEngine::new(config.match_config())),
            extractor: Arc::new(KeywordSkillExtractor::new().unwrap()),
            catalog: Arc::new(JobCatalog::from_json_str(CATALOG).unwrap()),
            config,
        };
        build_router(state)
    }

    fn app() -> Router {
        app_with(usize::MAX)
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn job_ids(body: &Value) -> Vec<u64> {
        body["matches"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["job_id"].as_u64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_match_with_inline_jobs() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/match",
            Some(json!({
                "skills": ["Python", "react", " docker "],
                "jobs": [{
                    "id": 77,
                    "title": "Data Engineer",
                    "required_skills": ["python", "sql"],
                    "preferred_skills": ["docker"]
                }]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_jobs_analyzed"], 1);
        assert_eq!(body["candidate_skills"], json!(["docker", "python", "react"]));
        let m = &body["matches"][0];
        assert_eq!(m["job_id"], 77);
        assert_eq!(m["score"], 65.0);
        assert_eq!(m["matched_required"], json!(["python"]));
        assert_eq!(m["missing_required"], json!(["sql"]));
        assert_eq!(m["matched_preferred"], json!(["docker"]));
        assert_eq!(m["total_required"], 2);
        assert_eq!(m["tips"], json!(["Consider highlighting or acquiring: sql"]));
        assert!(body["analysis_id"].is_string());
    }

    #[tokio::test]
    async fn test_match_against_catalog_ranks_all_jobs() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/match",
            Some(json!({"skills": ["python", "sql", "react"]})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_jobs_analyzed"], 3);
        // job 1: 70 + 0 = 70; job 3: 35 + 0 = 35; job 2: 0
        assert_eq!(job_ids(&body), vec![1, 3, 2]);
        assert_eq!(body["matches"][0]["company_name"], "Acme");
        assert_eq!(body["matches"][0]["company_logo"], "https://acme.test/logo.png");
        assert_eq!(body["matches"][0]["location"], "Remote");
    }

    #[tokio::test]
    async fn test_match_filtered_by_company() {
        let (_, body) = send(
            app(),
            "POST",
            "/api/v1/match",
            Some(json!({"skills": ["java"], "company_id": 1})),
        )
        .await;
        assert_eq!(job_ids(&body), vec![2, 1]);
        // job 2 declares no preferred skills: full required coverage only
        assert_eq!(body["matches"][0]["score"], 70.0);
        assert_eq!(body["matches"][1]["score"], 0.0);
    }

    #[tokio::test]
    async fn test_unknown_company_yields_empty_matches() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/match",
            Some(json!({"skills": ["java"], "company_id": 999})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_jobs_analyzed"], 0);
        assert_eq!(body["matches"], json!([]));
    }

    #[tokio::test]
    async fn test_non_list_skills_fail_fast() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/match",
            Some(json!({"skills": "python, sql"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.contains("expected a list of skills"), "{message}");
    }

    #[tokio::test]
    async fn test_concurrent_path_matches_sequential() {
        let request = json!({"skills": ["python", "typescript", "graphql"]});
        let (_, sequential) = send(app(), "POST", "/api/v1/match", Some(request.clone())).await;
        let (_, concurrent) = send(app_with(0), "POST", "/api/v1/match", Some(request)).await;
        assert_eq!(sequential["matches"], concurrent["matches"]);
    }

    #[tokio::test]
    async fn test_analyze_extracts_then_matches() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/analyze",
            Some(json!({
                "resume_text": "Built React apps in TypeScript with a GraphQL gateway.",
                "company_id": 2
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["extracted_skills"], json!(["graphql", "react", "typescript"]));
        assert_eq!(body["total_jobs_analyzed"], 1);
        assert_eq!(body["matches"][0]["score"], 100.0);
        assert_eq!(body["matches"][0]["tips"], json!([]));
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_text() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/analyze",
            Some(json!({"resume_text": "   "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_extract_skills() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/skills/extract",
            Some(json!({"resume_text": "Kubernetes and Terraform on AWS"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"], json!(["aws", "kubernetes", "terraform"]));
        assert_eq!(body["extractor_backend"], "keyword");
    }

    #[tokio::test]
    async fn test_catalog_routes() {
        let (status, body) = send(app(), "GET", "/api/v1/companies", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);

        let (status, body) = send(app(), "GET", "/api/v1/companies/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Globex");

        let (status, _) = send(app(), "GET", "/api/v1/companies/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, body) = send(app(), "GET", "/api/v1/jobs?company_id=2", None).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["title"], "Frontend Engineer");
    }
}
