use serde::{Deserialize, Serialize};

/// A formula that derives one field's value from others.
///
/// `source_field_ids` is the authoring-time dependency declaration; it is not
/// enforced at evaluation time (the formula text is what actually drives the
/// result), but [`validate_schema`](crate::validate_schema) cross-checks it
/// against the references the formula really makes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    pub id: String,
    pub formula: String,
    pub target_field_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_field_ids: Vec<String>,
}

impl Calculation {
    pub fn new(
        id: impl Into<String>,
        formula: impl Into<String>,
        target_field_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            formula: formula.into(),
            target_field_id: target_field_id.into(),
            source_field_ids: Vec::new(),
        }
    }
}
