//! Call surfaces for the job query engine.
//!
//! `GET /api/v1/jobs` and the callable action `search_jobs` share one path:
//! params → `QueryRequest` → `JobGateway::fetch_jobs`.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::errors::AppError;
use crate::jobs::gateway::JobGateway;
use crate::jobs::query::{JobSearchParams, QueryRequest};
use crate::models::job::{JobRecord, ResultPage};
use crate::state::AppState;

/// Callable action surface for in-process collaborators.
pub async fn search_jobs(gateway: &JobGateway, params: JobSearchParams) -> ResultPage {
    let request = QueryRequest::from_params(params);
    gateway.fetch_jobs(&request).await
}

/// GET /api/v1/jobs
///
/// Query params: `query`, `location`, `experience`, `jobType` (repeatable),
/// `datePosted`, `minSalary`, `page`, `sortBy`. Responds with a full
/// `{ jobs, metadata, source }` page; an unreadable query string is a 400.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ResultPage>, AppError> {
    let Query(pairs) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    let params = JobSearchParams::from_pairs(pairs);
    Ok(Json(search_jobs(&state.gateway, params).await))
}

/// POST /api/v1/jobs/search
///
/// The action surface over HTTP: same fields as the query string, as JSON.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    body: Result<Json<JobSearchParams>, JsonRejection>,
) -> Result<Json<ResultPage>, AppError> {
    let Json(params) = body.map_err(|e| AppError::Validation(e.body_text()))?;
    Ok(Json(search_jobs(&state.gateway, params).await))
}

/// GET /api/v1/jobs/:id
///
/// Looks up a listing in the local Record Store.
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<JobRecord>, AppError> {
    state
        .gateway
        .store()
        .get(&job_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
