use crate::{
    Condition, ConditionMode, ConditionOperator, FieldState, FieldStateMap, FormSchema,
    LogicAction, LogicRule, Value, Values,
};

/// Evaluate one condition against the current values.
///
/// Never panics and never errors: unknown fields read as null, type
/// mismatches fall back to the conservative result for the operator in
/// question, and an unrecognized operator is simply false.
#[must_use]
pub fn evaluate_condition(condition: &Condition, values: &Values) -> bool {
    let field_value = values.get(&condition.field_id).unwrap_or(&Value::Null);

    match condition.operator {
        ConditionOperator::Equals => field_value == &condition.value,
        ConditionOperator::NotEquals => field_value != &condition.value,
        ConditionOperator::Contains => {
            contains(field_value, &condition.value).unwrap_or(false)
        }
        ConditionOperator::NotContains => {
            contains(field_value, &condition.value).map_or(true, |c| !c)
        }
        ConditionOperator::GreaterThan => field_value.as_number() > condition.value.as_number(),
        ConditionOperator::LessThan => field_value.as_number() < condition.value.as_number(),
        ConditionOperator::GreaterThanOrEqual => {
            field_value.as_number() >= condition.value.as_number()
        }
        ConditionOperator::LessThanOrEqual => {
            field_value.as_number() <= condition.value.as_number()
        }
        ConditionOperator::Between => between(field_value, &condition.value),
        ConditionOperator::IsEmpty => field_value.is_empty(),
        ConditionOperator::IsNotEmpty => field_value.is_present(),
        ConditionOperator::StartsWith => {
            string_pair(field_value, &condition.value).is_some_and(|(s, n)| s.starts_with(&n))
        }
        ConditionOperator::EndsWith => {
            string_pair(field_value, &condition.value).is_some_and(|(s, n)| s.ends_with(&n))
        }
        ConditionOperator::Unknown => false,
    }
}

/// Membership test for `contains`/`notContains`.
///
/// Lists test membership of the condition value; strings test substring
/// containment. `None` means the field value supports neither, which the two
/// operators resolve to their conservative defaults.
fn contains(field_value: &Value, needle: &Value) -> Option<bool> {
    match field_value {
        Value::List(items) => Some(items.iter().any(|item| item == needle)),
        Value::Str(s) => match needle {
            Value::Null => Some(false),
            other => Some(s.contains(&other.to_text())),
        },
        _ => None,
    }
}

/// `between` requires a `[low, high]` pair; anything malformed is false.
fn between(field_value: &Value, bounds: &Value) -> bool {
    let Value::List(pair) = bounds else {
        return false;
    };
    let [low, high] = pair.as_slice() else {
        return false;
    };
    let n = field_value.as_number();
    n >= low.as_number() && n <= high.as_number()
}

fn string_pair(field_value: &Value, needle: &Value) -> Option<(String, String)> {
    let s = field_value.as_str()?;
    match needle {
        Value::Null => None,
        other => Some((s.to_owned(), other.to_text())),
    }
}

/// Whether a rule fires for the given values.
///
/// An empty condition list always fires, so unconditional default rules are
/// expressible. `all` ANDs the conditions, `any` ORs them.
#[must_use]
pub fn resolve_rule(rule: &LogicRule, values: &Values) -> bool {
    if rule.conditions.is_empty() {
        return true;
    }
    match rule.condition_type {
        ConditionMode::All => rule
            .conditions
            .iter()
            .all(|c| evaluate_condition(c, values)),
        ConditionMode::Any => rule
            .conditions
            .iter()
            .any(|c| evaluate_condition(c, values)),
    }
}

/// Resolve per-field `{hidden, disabled}` state for every field in the
/// schema.
///
/// Fields start from their static defaults; rules then apply in schema order,
/// so a later rule overrides an earlier one for the same target. Unknown
/// target ids are skipped silently.
///
/// One deliberate asymmetry, kept for compatibility with existing forms: a
/// `show` rule that does NOT fire forces its target hidden unless the target
/// is statically hidden. "Show if X" therefore reads as "visible only while X
/// holds", where `hide`, `enable`, and `disable` are plain fired/not-fired
/// toggles.
#[must_use]
pub fn compute_field_states(schema: &FormSchema, values: &Values) -> FieldStateMap {
    let mut states: FieldStateMap = schema
        .fields
        .iter()
        .map(|f| {
            (
                f.id.clone(),
                FieldState {
                    hidden: f.hidden,
                    disabled: f.disabled,
                },
            )
        })
        .collect();

    for rule in &schema.logic_rules {
        let fired = resolve_rule(rule, values);

        for target in &rule.target_field_ids {
            // A rule pointing at a field that no longer exists must not
            // break the rest of the form.
            let Some(field) = schema.field(target) else {
                continue;
            };
            let Some(state) = states.get_mut(target) else {
                continue;
            };

            match rule.action {
                LogicAction::Show => {
                    if fired {
                        state.hidden = false;
                    } else if !field.hidden {
                        state.hidden = true;
                    }
                }
                LogicAction::Hide => state.hidden = fired,
                LogicAction::Enable => state.disabled = !fired,
                LogicAction::Disable => state.disabled = fired,
                LogicAction::JumpTo | LogicAction::Unknown => {}
            }
        }
    }

    states
}
