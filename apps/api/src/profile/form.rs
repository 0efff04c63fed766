#![allow(dead_code)]

//! Profile builder form state: a flat record of scalar answers, four
//! checkbox groups, an editable skill-tag list, and one bounded rating.
//! Mutation goes through explicit setters and a single patch application
//! rather than ad-hoc spread merges, so multi-field updates stay atomic.

use serde::{Deserialize, Serialize};

/// The four checkbox groups on the profile builder. Each behaves as a set:
/// no duplicates, and toggling a value twice restores the original
/// membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiSelect {
    WorkPreference,
    JobType,
    SoftSkills,
    Culture,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    pub education: String,
    pub experience: String,
    pub target_roles: String,
    pub location: String,
    pub work_preference: Vec<String>,
    pub salary: String,
    /// Skill tags, auto-filled from a CV and editable. Not a completeness
    /// requirement.
    pub key_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub projects: String,
    /// Optional; not a completeness requirement.
    pub certifications: String,
    pub job_type: Vec<String>,
    pub industry: String,
    pub company_size: String,
    pub career_stage: String,
    pub job_function: String,
    pub work_style: String,
    pub culture: Vec<String>,
    /// Growth-opportunities importance, 1-5.
    pub growth: u8,
    pub work_life_balance: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            education: String::new(),
            experience: String::new(),
            target_roles: String::new(),
            location: String::new(),
            work_preference: Vec::new(),
            salary: String::new(),
            key_skills: Vec::new(),
            soft_skills: Vec::new(),
            projects: String::new(),
            certifications: String::new(),
            job_type: Vec::new(),
            industry: String::new(),
            company_size: String::new(),
            career_stage: String::new(),
            job_function: String::new(),
            work_style: String::new(),
            culture: Vec::new(),
            growth: 3, // slider midpoint
            work_life_balance: String::new(),
        }
    }
}

impl ProfileForm {
    fn select_mut(&mut self, which: MultiSelect) -> &mut Vec<String> {
        match which {
            MultiSelect::WorkPreference => &mut self.work_preference,
            MultiSelect::JobType => &mut self.job_type,
            MultiSelect::SoftSkills => &mut self.soft_skills,
            MultiSelect::Culture => &mut self.culture,
        }
    }

    pub fn selection(&self, which: MultiSelect) -> &[String] {
        match which {
            MultiSelect::WorkPreference => &self.work_preference,
            MultiSelect::JobType => &self.job_type,
            MultiSelect::SoftSkills => &self.soft_skills,
            MultiSelect::Culture => &self.culture,
        }
    }

    /// Checkbox semantics: adds the value if absent, removes it if present.
    pub fn toggle(&mut self, which: MultiSelect, value: &str) {
        let selection = self.select_mut(which);
        match selection.iter().position(|v| v == value) {
            Some(index) => {
                selection.remove(index);
            }
            None => selection.push(value.to_string()),
        }
    }

    /// Adds a skill tag, trimmed. Blank input and duplicates are ignored.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.key_skills.iter().any(|s| s == skill) {
            return false;
        }
        self.key_skills.push(skill.to_string());
        true
    }

    pub fn remove_skill(&mut self, skill: &str) -> bool {
        let before = self.key_skills.len();
        self.key_skills.retain(|s| s != skill);
        self.key_skills.len() != before
    }

    /// Applies a patch against this snapshot, producing the next state.
    /// Untouched fields carry over; all changes land together.
    pub fn apply(&self, patch: &ProfilePatch) -> ProfileForm {
        let mut next = self.clone();
        macro_rules! merge {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = &patch.$field {
                    next.$field = value.clone();
                })*
            };
        }
        merge!(
            education,
            experience,
            target_roles,
            location,
            salary,
            projects,
            certifications,
            industry,
            company_size,
            career_stage,
            job_function,
            work_style,
            work_life_balance,
        );
        if let Some(growth) = patch.growth {
            next.growth = growth.clamp(1, 5);
        }
        next
    }
}

/// A batch of scalar-field updates. Membership changes to the checkbox
/// groups and skill tags go through `toggle` / `add_skill` instead.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub education: Option<String>,
    pub experience: Option<String>,
    pub target_roles: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub projects: Option<String>,
    pub certifications: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub career_stage: Option<String>,
    pub job_function: Option<String>,
    pub work_style: Option<String>,
    pub work_life_balance: Option<String>,
    pub growth: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut form = ProfileForm::default();
        form.toggle(MultiSelect::WorkPreference, "Remote");
        assert_eq!(form.work_preference, vec!["Remote"]);
        form.toggle(MultiSelect::WorkPreference, "Remote");
        assert!(form.work_preference.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_original_membership() {
        let mut form = ProfileForm::default();
        form.toggle(MultiSelect::Culture, "Innovative");
        form.toggle(MultiSelect::Culture, "Flexible");
        let snapshot = form.culture.clone();

        form.toggle(MultiSelect::Culture, "Calm");
        form.toggle(MultiSelect::Culture, "Calm");
        assert_eq!(form.culture, snapshot);
    }

    #[test]
    fn test_toggle_never_duplicates() {
        let mut form = ProfileForm::default();
        form.toggle(MultiSelect::JobType, "Full-time");
        form.toggle(MultiSelect::JobType, "Contract");
        form.toggle(MultiSelect::JobType, "Full-time");
        form.toggle(MultiSelect::JobType, "Full-time");
        assert_eq!(form.job_type, vec!["Contract", "Full-time"]);
    }

    #[test]
    fn test_toggle_preserves_insertion_order() {
        let mut form = ProfileForm::default();
        for skill in ["Communication", "Leadership", "Teamwork"] {
            form.toggle(MultiSelect::SoftSkills, skill);
        }
        form.toggle(MultiSelect::SoftSkills, "Leadership");
        assert_eq!(form.soft_skills, vec!["Communication", "Teamwork"]);
    }

    #[test]
    fn test_add_skill_trims_and_rejects_duplicates() {
        let mut form = ProfileForm::default();
        assert!(form.add_skill("  Rust  "));
        assert!(!form.add_skill("Rust"));
        assert!(!form.add_skill("   "));
        assert_eq!(form.key_skills, vec!["Rust"]);
    }

    #[test]
    fn test_remove_skill() {
        let mut form = ProfileForm::default();
        form.add_skill("React");
        form.add_skill("TypeScript");
        assert!(form.remove_skill("React"));
        assert!(!form.remove_skill("React"));
        assert_eq!(form.key_skills, vec!["TypeScript"]);
    }

    #[test]
    fn test_apply_patches_multiple_fields_atomically() {
        let form = ProfileForm::default();
        let patch = ProfilePatch {
            education: Some("BSc Computer Science".to_string()),
            salary: Some("75k-100k".to_string()),
            growth: Some(5),
            ..ProfilePatch::default()
        };
        let next = form.apply(&patch);

        assert_eq!(next.education, "BSc Computer Science");
        assert_eq!(next.salary, "75k-100k");
        assert_eq!(next.growth, 5);
        // untouched fields carry over
        assert_eq!(next.experience, form.experience);
        assert_eq!(next.work_preference, form.work_preference);
        // the snapshot itself is unchanged
        assert!(form.education.is_empty());
    }

    #[test]
    fn test_apply_clamps_growth_to_rating_bounds() {
        let form = ProfileForm::default();
        let low = form.apply(&ProfilePatch {
            growth: Some(0),
            ..ProfilePatch::default()
        });
        assert_eq!(low.growth, 1);
        let high = form.apply(&ProfilePatch {
            growth: Some(9),
            ..ProfilePatch::default()
        });
        assert_eq!(high.growth, 5);
    }

    #[test]
    fn test_default_growth_is_slider_midpoint() {
        assert_eq!(ProfileForm::default().growth, 3);
    }

    #[test]
    fn test_selection_reads_back_toggled_group() {
        let mut form = ProfileForm::default();
        form.toggle(MultiSelect::WorkPreference, "Hybrid");
        assert_eq!(form.selection(MultiSelect::WorkPreference), ["Hybrid"]);
        assert!(form.selection(MultiSelect::JobType).is_empty());
    }
}
