use std::collections::HashSet;

use crate::formula::parse_formula;
use crate::{FormSchema, SchemaError};

/// Check a schema's authoring-time invariants.
///
/// The evaluation engine deliberately tolerates every one of these defects at
/// runtime; this is the strict counterpart for tooling that wants to refuse
/// saving a broken schema. Checks, in order: field id uniqueness, options on
/// choice fields, rule references, calculation references, and agreement
/// between each formula's actual references and its declared
/// `sourceFieldIds`.
///
/// # Errors
///
/// Returns the first [`SchemaError`] found.
pub fn validate_schema(schema: &FormSchema) -> Result<(), SchemaError> {
    let mut ids: HashSet<&str> = HashSet::with_capacity(schema.fields.len());
    for field in &schema.fields {
        if !ids.insert(&field.id) {
            return Err(SchemaError::DuplicateFieldId {
                id: field.id.clone(),
            });
        }
        if field.is_choice_type() && field.options.is_empty() {
            return Err(SchemaError::MissingOptions {
                id: field.id.clone(),
            });
        }
    }

    for rule in &schema.logic_rules {
        for target in &rule.target_field_ids {
            if !ids.contains(target.as_str()) {
                return Err(SchemaError::UnknownRuleTarget {
                    rule: rule.id.clone(),
                    field: target.clone(),
                });
            }
        }
        for condition in &rule.conditions {
            if !ids.contains(condition.field_id.as_str()) {
                return Err(SchemaError::UnknownConditionField {
                    rule: rule.id.clone(),
                    field: condition.field_id.clone(),
                });
            }
        }
    }

    for calc in &schema.calculations {
        if !ids.contains(calc.target_field_id.as_str()) {
            return Err(SchemaError::UnknownCalculationTarget {
                calculation: calc.id.clone(),
                field: calc.target_field_id.clone(),
            });
        }
        for referenced in parse_formula(&calc.formula) {
            if !ids.contains(referenced.as_str()) {
                return Err(SchemaError::UnknownFormulaRef {
                    calculation: calc.id.clone(),
                    field: referenced,
                });
            }
            if !calc.source_field_ids.contains(&referenced) {
                return Err(SchemaError::UndeclaredDependency {
                    calculation: calc.id.clone(),
                    field: referenced,
                });
            }
        }
    }

    Ok(())
}
