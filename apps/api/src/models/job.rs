use serde::{Deserialize, Serialize};

/// A persisted job-vacancy record shown on the home listing.
///
/// Never mutated after creation; the whole list round-trips through the
/// store as one JSON blob under the `skillBridgeJobs` key, so the field
/// names stay camelCase for compatibility with existing stored data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique, derived from the posting time.
    pub id: String,
    pub title: String,
    pub company: String,
    pub category: String,
    pub location: String,
    pub description: String,
    /// MM/DD/YYYY, fixed at creation.
    pub posted_date: String,
}
