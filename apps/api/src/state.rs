use crate::jobs::JobBoard;
use crate::matching::MatchingClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Job listing model over the injected key-value store.
    pub jobs: JobBoard,
    /// Outbound client for the external matching service.
    pub matching: MatchingClient,
}
