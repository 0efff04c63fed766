//! Job listing model: load and post job vacancies backed by the key-value
//! store. Every post rewrites the full list — the store has no append
//! primitive, and last writer wins.

pub mod handlers;

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::Job;
use crate::store::KeyValueStore;

/// Storage key holding the JSON-encoded job list.
pub const JOBS_KEY: &str = "skillBridgeJobs";

/// Incoming job posting. All five fields are required (non-empty after trim);
/// values are stored verbatim, untrimmed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub job_role: String,
    pub company: String,
    pub category: String,
    pub location: String,
    pub description: String,
}

#[derive(Clone)]
pub struct JobBoard {
    store: Arc<dyn KeyValueStore>,
}

impl JobBoard {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the persisted job list. An absent blob means no jobs yet.
    /// An unparseable blob is also treated as empty: a corrupted value is
    /// indistinguishable from "no jobs yet", so it is logged and swallowed.
    pub async fn load_jobs(&self) -> Result<Vec<Job>, AppError> {
        let Some(raw) = self
            .store
            .get(JOBS_KEY)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?
        else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(jobs) => Ok(jobs),
            Err(e) => {
                warn!("Job list blob under '{JOBS_KEY}' failed to parse, treating as empty: {e}");
                Ok(Vec::new())
            }
        }
    }

    /// Validates the draft, appends the new record, and rewrites the full
    /// list. A blank required field fails before any storage mutation.
    /// Duplicate title/company/location postings are allowed.
    pub async fn post_job(&self, draft: &JobDraft) -> Result<Job, AppError> {
        let missing = missing_fields(draft);
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let mut jobs = self.load_jobs().await?;
        let job = Job {
            id: job_id_from(Utc::now().timestamp_millis(), &jobs),
            title: draft.job_role.clone(),
            company: draft.company.clone(),
            category: draft.category.clone(),
            location: draft.location.clone(),
            description: draft.description.clone(),
            posted_date: Utc::now().format("%m/%d/%Y").to_string(),
        };
        jobs.push(job.clone());

        let encoded = serde_json::to_string(&jobs)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode job list: {e}")))?;
        self.store
            .set(JOBS_KEY, &encoded)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        info!("Posted job '{}' at '{}' (id {})", job.title, job.company, job.id);
        Ok(job)
    }
}

fn missing_fields(draft: &JobDraft) -> Vec<&'static str> {
    let required = [
        ("jobRole", &draft.job_role),
        ("company", &draft.company),
        ("category", &draft.category),
        ("location", &draft.location),
        ("description", &draft.description),
    ];
    required
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
}

/// Derives a unique id from the posting time, bumping past any id already
/// present so two posts in the same millisecond never collide.
fn job_id_from(now_ms: i64, existing: &[Job]) -> String {
    let mut candidate = now_ms;
    while existing.iter().any(|j| j.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}
