use serde::{Deserialize, Serialize};

/// A single named, user-editable profile attribute.
///
/// Fixed fields are seeded when a qualifications form is created; custom
/// fields are appended by the user. Both share one shape — whether a field
/// may be removed is a presentation decision, not a data-model invariant.
/// Serialized camelCase to match the qualification-form wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Unique within a field set, immutable once created.
    pub id: String,
    pub label: String,
    pub value: String,
    pub is_custom: bool,
}
