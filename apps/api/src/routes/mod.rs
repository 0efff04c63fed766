pub mod client;
pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::jobs::handlers as job_handlers;
use crate::matching::handlers as matching_handlers;
use crate::profile::handlers as profile_handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job listing
        .route(
            "/api/v1/jobs",
            get(job_handlers::handle_list_jobs).post(job_handlers::handle_post_job),
        )
        // Qualifications
        .route(
            "/api/v1/qualifications/fields",
            get(profile_handlers::handle_field_template),
        )
        .route(
            "/api/v1/qualifications",
            post(matching_handlers::handle_submit_qualifications),
        )
        .route(
            "/api/v1/qualifications/cv",
            post(matching_handlers::handle_upload_cv),
        )
        // Profile builder
        .route(
            "/api/v1/profile/validate",
            post(profile_handlers::handle_validate_profile),
        )
        // Auth (validate-only)
        .route("/api/v1/auth/signup", post(profile_handlers::handle_signup))
        .route("/api/v1/auth/login", post(profile_handlers::handle_login))
        .fallback(not_found)
        .with_state(state)
}
