use serde::{Deserialize, Serialize};

use super::Condition;

/// How a rule aggregates its conditions: `all` = logical AND, `any` = OR.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionMode {
    #[default]
    All,
    Any,
}

/// What a firing rule does to its target fields.
///
/// `jumpTo` is reserved for a navigation feature outside this engine and is a
/// no-op here; unrecognized action strings deserialize to a no-op catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogicAction {
    Show,
    Hide,
    Enable,
    Disable,
    JumpTo,
    #[serde(other)]
    Unknown,
}

/// A conditional statement that alters target fields' visibility or enabled
/// state.
///
/// Rules apply in schema order; a later rule overrides an earlier one for the
/// same target field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicRule {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub condition_type: ConditionMode,
    pub action: LogicAction,
    #[serde(default)]
    pub target_field_ids: Vec<String>,
}

impl LogicRule {
    /// A rule with a single condition and a single target, the common case.
    pub fn single(
        id: impl Into<String>,
        condition: Condition,
        action: LogicAction,
        target_field_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: None,
            conditions: vec![condition],
            condition_type: ConditionMode::All,
            action,
            target_field_ids: vec![target_field_id.into()],
        }
    }
}
