use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Value;

/// Snapshot of the current form data, keyed by field id.
///
/// Supplied fresh on every evaluation call. The engine only reads from it;
/// hosts merge derived values back in and re-run evaluation on each change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Values {
    data: BTreeMap<String, Value>,
}

impl Values {
    /// Create an empty values map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, builder style.
    #[must_use]
    pub fn set(mut self, field_id: &str, value: impl Into<Value>) -> Self {
        self.insert(field_id, value.into());
        self
    }

    /// Insert a field value (mutable reference version).
    pub fn insert(&mut self, field_id: impl Into<String>, value: Value) {
        self.data.insert(field_id.into(), value);
    }

    /// Look up a field value. `None` means the field has never been answered.
    #[must_use]
    pub fn get(&self, field_id: &str) -> Option<&Value> {
        self.data.get(field_id)
    }

    /// Fold a derived-values map (from
    /// [`compute_derived_values`](crate::compute_derived_values)) back into
    /// this snapshot, as the host loop does between evaluation passes.
    pub fn merge_derived(&mut self, derived: &BTreeMap<String, f64>) {
        for (field_id, result) in derived {
            self.data.insert(field_id.clone(), Value::Number(*result));
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Value)> for Values {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}
