//! Axum route handlers for the profile API: the seeded qualifications
//! field template, profile completeness checks, and the validate-only
//! sign-up / log-in endpoints.

use axum::Json;
use serde::Serialize;

use crate::models::Field;
use crate::profile::auth::{validate_login, validate_signup, FieldError, LoginForm, SignupForm};
use crate::profile::completeness::{compute_completeness, CompletenessReport};
use crate::profile::fields::FieldSet;
use crate::profile::form::ProfileForm;
use crate::routes::client;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthValidationResponse {
    pub valid: bool,
    pub errors: Vec<FieldError>,
    /// Client route to continue to when validation passes.
    pub next_route: Option<&'static str>,
}

impl AuthValidationResponse {
    fn from_errors(errors: Vec<FieldError>) -> Self {
        let valid = errors.is_empty();
        Self {
            valid,
            errors,
            next_route: valid.then_some(client::PROFILE),
        }
    }
}

/// GET /api/v1/qualifications/fields
///
/// The fixed field template a fresh qualifications form starts from.
pub async fn handle_field_template() -> Json<Vec<Field>> {
    Json(FieldSet::new().into_fields())
}

/// POST /api/v1/profile/validate
///
/// Recomputes submission readiness for a profile builder form. Pure and
/// side-effect free; the report names every missing requirement.
pub async fn handle_validate_profile(Json(form): Json<ProfileForm>) -> Json<CompletenessReport> {
    Json(compute_completeness(&form))
}

/// POST /api/v1/auth/signup
pub async fn handle_signup(Json(form): Json<SignupForm>) -> Json<AuthValidationResponse> {
    Json(AuthValidationResponse::from_errors(validate_signup(&form)))
}

/// POST /api/v1/auth/login
pub async fn handle_login(Json(form): Json<LoginForm>) -> Json<AuthValidationResponse> {
    Json(AuthValidationResponse::from_errors(validate_login(&form)))
}
