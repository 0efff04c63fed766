//! Axum route handlers for the two submission flows: CV upload and the
//! manual qualifications form. Both forward to the matching service and
//! hand back its message plus the next client route.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::models::Field;
use crate::routes::client;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QualificationsRequest {
    pub qualifications: Vec<Field>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub message: String,
    pub matching_route: String,
}

/// POST /api/v1/qualifications
///
/// Drops unfilled fields, rejects an all-empty submission, and forwards
/// the rest to the matching service.
pub async fn handle_submit_qualifications(
    State(state): State<AppState>,
    Json(request): Json<QualificationsRequest>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let filled: Vec<Field> = request
        .qualifications
        .into_iter()
        .filter(|f| !f.value.trim().is_empty())
        .collect();

    if filled.is_empty() {
        return Err(AppError::Validation(
            "Please fill at least one field before submitting".to_string(),
        ));
    }

    let matched = state
        .matching
        .submit_qualifications(&filled)
        .await
        .map_err(|e| AppError::Gateway(e.to_string()))?;

    Ok(Json(into_response(matched)))
}

/// POST /api/v1/qualifications/cv
///
/// Accepts a multipart upload with a single `cv` part and forwards it to
/// the matching service.
pub async fn handle_upload_cv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SubmissionResponse>, AppError> {
    let mut cv: Option<(String, Bytes)> = None;

    while let Some(part) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if part.name() == Some("cv") {
            let file_name = part.file_name().unwrap_or("cv").to_string();
            let data = part
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read CV part: {e}")))?;
            cv = Some((file_name, data));
        }
    }

    let (file_name, data) =
        cv.ok_or_else(|| AppError::Validation("Please upload a CV before submitting".to_string()))?;
    if data.is_empty() {
        return Err(AppError::Validation("Uploaded CV is empty".to_string()));
    }

    let matched = state
        .matching
        .upload_cv(&file_name, data)
        .await
        .map_err(|e| AppError::Gateway(e.to_string()))?;

    Ok(Json(into_response(matched)))
}

/// Passes the gateway's route through untouched, flagging routes the
/// client is not known to serve.
fn into_response(matched: crate::matching::client::MatchResponse) -> SubmissionResponse {
    if !client::is_known_route(&matched.matching_route) {
        warn!(
            "Matching service returned unknown client route '{}'",
            matched.matching_route
        );
    }
    SubmissionResponse {
        message: matched.message,
        matching_route: matched.matching_route,
    }
}
