use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Calculation, Field, LogicRule, SchemaError, Value, Values};
use crate::FormError;

/// Presentation settings owned by the host; carried for interface fidelity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_button_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<BTreeMap<String, String>>,
}

/// Aggregate root of a form definition: fields (in display order), logic
/// rules (in application order), and calculations.
///
/// Constructed wholesale by the authoring layer and passed immutably into
/// every evaluation call; the engine never mutates a schema. `logicRules` and
/// `calculations` default to empty when absent in JSON, matching how older
/// persisted schemas predate both features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub logic_rules: Vec<LogicRule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub calculations: Vec<Calculation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<FormSettings>,
}

impl FormSchema {
    /// An empty form with the given identity.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            fields: Vec::new(),
            logic_rules: Vec::new(),
            calculations: Vec::new(),
            settings: None,
        }
    }

    /// Look up a field by id.
    #[must_use]
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Seed a values map from every field's default value, skipping fields
    /// that default to null.
    #[must_use]
    pub fn default_values(&self) -> Values {
        self.fields
            .iter()
            .filter_map(|f| {
                let value = f.default_value();
                (value != Value::Null).then(|| (f.id.clone(), value))
            })
            .collect()
    }

    /// Parse a schema from its persisted JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Json`] if the input is not a valid schema document.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to the persisted JSON form (pretty-printed, the shape the
    /// authoring layer writes).
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, FormError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and parse a schema JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] on I/O or parse failure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FormError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check authoring-time invariants: unique field ids, options on choice
    /// fields, and that rules and calculations reference real fields.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] found.
    pub fn validate(&self) -> Result<(), SchemaError> {
        crate::validate::validate_schema(self)
    }
}
