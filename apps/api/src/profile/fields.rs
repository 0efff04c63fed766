#![allow(dead_code)]

//! Qualification field set: the ordered list of named profile fields on the
//! manual qualifications form. Twenty fixed fields are seeded at creation;
//! custom fields are appended by the user with fresh, never-reused ids.

use tracing::warn;
use uuid::Uuid;

use crate::models::Field;

/// The fixed fields every qualifications form starts with, in render order.
const FIXED_FIELDS: &[(&str, &str)] = &[
    ("fullName", "Full Name"),
    ("dateOfBirth", "Date of Birth"),
    ("headline", "Headline"),
    ("email", "Email"),
    ("website", "Website"),
    ("phone", "Phone"),
    ("location", "Location"),
    ("profiles", "Profiles"),
    ("experience", "Experience"),
    ("education", "Education"),
    ("skills", "Skills"),
    ("languages", "Languages"),
    ("awards", "Awards"),
    ("certifications", "Certifications"),
    ("interests", "Interests"),
    ("projects", "Projects"),
    ("publications", "Publications"),
    ("volunteering", "Volunteering"),
    ("references", "References"),
    ("summary", "Summary"),
];

/// An ordered, mutable set of profile fields. Ordering is insertion order
/// and ids are immutable once created.
#[derive(Debug, Clone)]
pub struct FieldSet {
    fields: Vec<Field>,
}

impl FieldSet {
    /// A fresh form seeded with the fixed fields, all values empty.
    pub fn new() -> Self {
        let fields = FIXED_FIELDS
            .iter()
            .map(|(id, label)| Field {
                id: (*id).to_string(),
                label: (*label).to_string(),
                value: String::new(),
                is_custom: false,
            })
            .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }

    /// Appends a custom field with an empty value and a fresh id.
    /// Rejects empty or whitespace-only labels without touching the set.
    pub fn add_field(&mut self, label: &str) -> Option<&Field> {
        if label.trim().is_empty() {
            warn!("Rejected custom field with blank label");
            return None;
        }
        self.fields.push(Field {
            // Uuid rather than a timestamp: a removed id must never be reused,
            // even across rapid add/remove cycles.
            id: format!("custom_{}", Uuid::new_v4().simple()),
            label: label.to_string(),
            value: String::new(),
            is_custom: true,
        });
        self.fields.last()
    }

    /// Deletes the field with the given id; no-op if absent. The operation
    /// does not distinguish fixed from custom fields — removal eligibility
    /// is a presentation-layer decision.
    pub fn remove_field(&mut self, id: &str) -> bool {
        let before = self.fields.len();
        self.fields.retain(|f| f.id != id);
        self.fields.len() != before
    }

    /// Replaces the value of the field with the given id; no-op if absent.
    pub fn update_field(&mut self, id: &str, value: &str) -> bool {
        match self.fields.iter_mut().find(|f| f.id == id) {
            Some(field) => {
                field.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Fields whose trimmed value is non-empty, in form order. Recomputed
    /// on every call, never cached.
    pub fn filled(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.value.trim().is_empty())
    }
}

impl Default for FieldSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_seeds_twenty_fixed_fields() {
        let form = FieldSet::new();
        assert_eq!(form.fields().len(), 20);
        assert!(form.fields().iter().all(|f| !f.is_custom));
        assert!(form.fields().iter().all(|f| f.value.is_empty()));
        assert_eq!(form.fields()[0].id, "fullName");
        assert_eq!(form.fields()[19].label, "Summary");
    }

    #[test]
    fn test_add_field_appends_custom_with_empty_value() {
        let mut form = FieldSet::new();
        let field = form.add_field("Patents").unwrap().clone();
        assert!(field.is_custom);
        assert!(field.value.is_empty());
        assert_eq!(field.label, "Patents");
        assert_eq!(form.fields().len(), 21);
        assert_eq!(form.fields().last().unwrap(), &field);
    }

    #[test]
    fn test_add_field_rejects_blank_label() {
        let mut form = FieldSet::new();
        assert!(form.add_field("").is_none());
        assert!(form.add_field("   ").is_none());
        assert_eq!(form.fields().len(), 20);
    }

    #[test]
    fn test_removed_id_is_never_reused() {
        let mut form = FieldSet::new();
        let first_id = form.add_field("Patents").unwrap().id.clone();
        assert!(form.remove_field(&first_id));
        let second_id = form.add_field("Patents").unwrap().id.clone();
        assert_ne!(first_id, second_id);
    }

    #[test]
    fn test_remove_field_is_noop_on_unknown_id() {
        let mut form = FieldSet::new();
        assert!(!form.remove_field("custom_nonexistent"));
        assert_eq!(form.fields().len(), 20);
    }

    #[test]
    fn test_remove_field_does_not_distinguish_fixed_fields() {
        let mut form = FieldSet::new();
        assert!(form.remove_field("fullName"));
        assert_eq!(form.fields().len(), 19);
    }

    #[test]
    fn test_update_field_replaces_value() {
        let mut form = FieldSet::new();
        assert!(form.update_field("email", "dev@example.com"));
        let email = form.fields().iter().find(|f| f.id == "email").unwrap();
        assert_eq!(email.value, "dev@example.com");
    }

    #[test]
    fn test_update_field_is_noop_on_unknown_id() {
        let mut form = FieldSet::new();
        assert!(!form.update_field("custom_missing", "value"));
        assert!(form.fields().iter().all(|f| f.value.is_empty()));
    }

    #[test]
    fn test_filled_skips_whitespace_only_values() {
        let mut form = FieldSet::new();
        form.update_field("fullName", "Ada Lovelace");
        form.update_field("headline", "   ");
        form.update_field("skills", "Rust, SQL");

        let filled: Vec<_> = form.filled().map(|f| f.id.as_str()).collect();
        assert_eq!(filled, vec!["fullName", "skills"]);
    }

    #[test]
    fn test_filled_is_restartable() {
        let mut form = FieldSet::new();
        form.update_field("fullName", "Ada Lovelace");
        assert_eq!(form.filled().count(), 1);
        form.update_field("email", "ada@example.com");
        assert_eq!(form.filled().count(), 2);
    }
}
