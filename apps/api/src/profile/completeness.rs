#![allow(dead_code)]

//! Submission readiness for the profile builder form.
//!
//! Completeness is a pure conjunction: twelve required scalars non-empty
//! after trim, and all four checkbox groups non-empty. Cheap to recompute,
//! so callers re-evaluate on every request rather than caching.

use serde::{Deserialize, Serialize};

use crate::profile::form::ProfileForm;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessReport {
    pub complete: bool,
    /// Required scalar fields that are empty after trimming, camelCase wire
    /// names, in form order.
    pub missing_fields: Vec<String>,
    /// Required checkbox groups with no selection.
    pub missing_selections: Vec<String>,
}

pub fn compute_completeness(form: &ProfileForm) -> CompletenessReport {
    let required_scalars = [
        ("education", &form.education),
        ("experience", &form.experience),
        ("targetRoles", &form.target_roles),
        ("location", &form.location),
        ("salary", &form.salary),
        ("projects", &form.projects),
        ("industry", &form.industry),
        ("companySize", &form.company_size),
        ("careerStage", &form.career_stage),
        ("jobFunction", &form.job_function),
        ("workStyle", &form.work_style),
        ("workLifeBalance", &form.work_life_balance),
    ];
    let missing_fields: Vec<String> = required_scalars
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name.to_string())
        .collect();

    let required_selections = [
        ("workPreference", &form.work_preference),
        ("jobType", &form.job_type),
        ("softSkills", &form.soft_skills),
        ("culture", &form.culture),
    ];
    let missing_selections: Vec<String> = required_selections
        .into_iter()
        .filter(|(_, selection)| selection.is_empty())
        .map(|(name, _)| name.to_string())
        .collect();

    CompletenessReport {
        complete: missing_fields.is_empty() && missing_selections.is_empty(),
        missing_fields,
        missing_selections,
    }
}

pub fn is_complete(form: &ProfileForm) -> bool {
    compute_completeness(form).complete
}
