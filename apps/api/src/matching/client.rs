//! Remote submission gateway — the single point of entry for calls to the
//! external matching service.
//!
//! The protocol is one opaque request/response pair per submission: no
//! retry, no backoff, no idempotency key. Callers treat every failure
//! class the same way, so the error variants here exist for logging, not
//! for branching.

use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::Field;

const UPLOAD_CV_PATH: &str = "/api/upload-cv";
const SUBMIT_QUALIFICATIONS_PATH: &str = "/api/submit-qualifications";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum MatchingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("matching service returned status {status}: {message}")]
    Api { status: u16, message: String },
}

/// The gateway's response to either submission: a human-readable message
/// and the client route to navigate to next.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub message: String,
    pub matching_route: String,
}

#[derive(Debug, Serialize)]
struct QualificationsPayload<'a> {
    qualifications: &'a [Field],
}

#[derive(Clone)]
pub struct MatchingClient {
    client: Client,
    base_url: String,
}

impl MatchingClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    /// POST {base}/api/upload-cv — multipart form with a single `cv` part.
    pub async fn upload_cv(
        &self,
        file_name: &str,
        data: Bytes,
    ) -> Result<MatchResponse, MatchingError> {
        let part = reqwest::multipart::Part::bytes(data.to_vec()).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("cv", part);

        let response = self
            .client
            .post(format!("{}{UPLOAD_CV_PATH}", self.base_url))
            .multipart(form)
            .send()
            .await?;
        decode(response).await
    }

    /// POST {base}/api/submit-qualifications — JSON body of filled fields.
    pub async fn submit_qualifications(
        &self,
        qualifications: &[Field],
    ) -> Result<MatchResponse, MatchingError> {
        let response = self
            .client
            .post(format!("{}{SUBMIT_QUALIFICATIONS_PATH}", self.base_url))
            .json(&QualificationsPayload { qualifications })
            .send()
            .await?;
        decode(response).await
    }
}

async fn decode(response: reqwest::Response) -> Result<MatchResponse, MatchingError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(MatchingError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let matched: MatchResponse = response.json().await?;
    debug!(
        "Matching service responded: route '{}', message '{}'",
        matched.matching_route, matched.message
    );
    Ok(matched)
}
