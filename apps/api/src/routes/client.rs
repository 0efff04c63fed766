//! The client-side navigation targets the front-end serves. These are not
//! HTTP endpoints here; they exist to sanity-check matching routes the
//! gateway hands back before the client is told to navigate to them.

pub const HOME: &str = "/";
pub const QUALIFICATIONS: &str = "/qualifications";
pub const QUALIFICATIONS_FORM: &str = "/qualifications-form";
pub const POST_JOB: &str = "/post-job";
pub const JOBS: &str = "/jobs";
pub const JOB_MATCHING: &str = "/job-matching";
pub const JOB_DETAILS: &str = "/job-details";
pub const PROFILE: &str = "/profile";
pub const LOGOUT: &str = "/logout";

pub const KNOWN_ROUTES: &[&str] = &[
    HOME,
    QUALIFICATIONS,
    QUALIFICATIONS_FORM,
    POST_JOB,
    JOBS,
    JOB_MATCHING,
    JOB_DETAILS,
    PROFILE,
    LOGOUT,
];

/// Anything else falls through to the client's catch-all not-found page.
pub fn is_known_route(path: &str) -> bool {
    KNOWN_ROUTES.contains(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_screens_are_known_routes() {
        assert!(is_known_route(JOB_MATCHING));
        assert!(is_known_route(JOB_DETAILS));
    }

    #[test]
    fn test_unknown_route_is_flagged() {
        assert!(!is_known_route("/definitely-not-a-page"));
        assert!(!is_known_route(""));
        assert!(!is_known_route("job-matching")); // missing leading slash
    }
}
