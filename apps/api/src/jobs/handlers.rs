//! Axum route handlers for the job listing API.

use axum::{extract::State, http::StatusCode, Json};

use crate::errors::AppError;
use crate::jobs::JobDraft;
use crate::models::Job;
use crate::state::AppState;

/// GET /api/v1/jobs
///
/// Returns all posted jobs in posting order. Missing or corrupt storage
/// yields an empty list, never an error.
pub async fn handle_list_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, AppError> {
    let jobs = state.jobs.load_jobs().await?;
    Ok(Json(jobs))
}

/// POST /api/v1/jobs
///
/// Posts a new vacancy. Responds 400 naming the blank fields when the
/// draft is incomplete, 201 with the created record otherwise.
pub async fn handle_post_job(
    State(state): State<AppState>,
    Json(draft): Json<JobDraft>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    let job = state.jobs.post_job(&draft).await?;
    Ok((StatusCode::CREATED, Json(job)))
}
