use serde::{Deserialize, Serialize};

use super::Value;

/// Operators a condition can apply to a field value.
///
/// Serialized as lowercase camelCase strings (`"notEquals"`,
/// `"greaterThanOrEqual"`, ...). An unrecognized operator string deserializes
/// to [`Unknown`](Self::Unknown), which always evaluates false rather than
/// failing the whole schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConditionOperator {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    Between,
    IsEmpty,
    IsNotEmpty,
    StartsWith,
    EndsWith,
    #[serde(other)]
    Unknown,
}

/// One atomic test against a single field value.
///
/// `value` is operator-dependent: a scalar for comparisons, a two-element
/// `[low, high]` list for `between`, and unused for the emptiness checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub field_id: String,
    pub operator: ConditionOperator,
    #[serde(default)]
    pub value: Value,
}

impl Condition {
    pub fn new(
        field_id: impl Into<String>,
        operator: ConditionOperator,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            field_id: field_id.into(),
            operator,
            value: value.into(),
        }
    }
}
