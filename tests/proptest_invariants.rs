
use formlogic::{
    compute_field_states, evaluate_condition, evaluate_formula, resolve_rule, Condition,
    ConditionMode, ConditionOperator, LogicRule, Value,
};
use proptest::prelude::*;
use strategies::{arb_condition, arb_formula, arb_rule, arb_schema, arb_values};

// ---------------------------------------------------------------------------
// Invariant 1: Determinism
//
// The same schema + values must always produce the same field-state map, and
// the same formula + values the same result.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn evaluation_is_deterministic(schema in arb_schema(), values in arb_values()) {
        let a = compute_field_states(&schema, &values);
        let b = compute_field_states(&schema, &values);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn formula_evaluation_is_deterministic(formula in arb_formula(), values in arb_values()) {
        let a = evaluate_formula(&formula, &values);
        let b = evaluate_formula(&formula, &values);
        prop_assert_eq!(a, b);
    }
}

// ---------------------------------------------------------------------------
// Invariant 2: Totality
//
// No generated input may panic the engine, and the state map always covers
// exactly the schema's fields.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn condition_evaluation_never_panics(condition in arb_condition(), values in arb_values()) {
        let _ = evaluate_condition(&condition, &values);
    }

    #[test]
    fn formula_evaluation_never_panics(formula in "\\PC{0,40}", values in arb_values()) {
        // Arbitrary printable text, not just well-formed formulas.
        let _ = evaluate_formula(&formula, &values);
    }

    #[test]
    fn state_map_covers_every_field(schema in arb_schema(), values in arb_values()) {
        let states = compute_field_states(&schema, &values);
        prop_assert_eq!(states.len(), schema.fields.len());
        for field in &schema.fields {
            prop_assert!(states.contains_key(&field.id));
        }
    }
}

// ---------------------------------------------------------------------------
// Invariant 3: Operator algebra
//
// equals/notEquals are complements, as are isEmpty/isNotEmpty; an all-mode
// rule firing implies the same rule in any-mode fires (for non-empty
// condition lists).
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn equals_and_not_equals_are_complements(condition in arb_condition(), values in arb_values()) {
        let eq = Condition { operator: ConditionOperator::Equals, ..condition.clone() };
        let ne = Condition { operator: ConditionOperator::NotEquals, ..condition };
        prop_assert_ne!(evaluate_condition(&eq, &values), evaluate_condition(&ne, &values));
    }

    #[test]
    fn empty_and_present_are_complements(condition in arb_condition(), values in arb_values()) {
        let empty = Condition {
            operator: ConditionOperator::IsEmpty,
            value: Value::Null,
            ..condition.clone()
        };
        let present = Condition {
            operator: ConditionOperator::IsNotEmpty,
            value: Value::Null,
            ..condition
        };
        prop_assert_ne!(
            evaluate_condition(&empty, &values),
            evaluate_condition(&present, &values)
        );
    }

    #[test]
    fn all_mode_implies_any_mode(rule in arb_rule(), values in arb_values()) {
        prop_assume!(!rule.conditions.is_empty());
        let all = LogicRule { condition_type: ConditionMode::All, ..rule.clone() };
        let any = LogicRule { condition_type: ConditionMode::Any, ..rule };
        if resolve_rule(&all, &values) {
            prop_assert!(resolve_rule(&any, &values));
        }
    }

    #[test]
    fn empty_condition_list_always_fires(rule in arb_rule(), values in arb_values()) {
        let unconditional = LogicRule { conditions: vec![], ..rule };
        prop_assert!(resolve_rule(&unconditional, &values));
    }
}

// ---------------------------------------------------------------------------
// Invariant 4: Rules never touch values or schema
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn evaluation_leaves_inputs_intact(schema in arb_schema(), values in arb_values()) {
        let schema_before = schema.to_json().unwrap();
        let values_before = values.clone();
        let _ = compute_field_states(&schema, &values);
        prop_assert_eq!(schema.to_json().unwrap(), schema_before);
        prop_assert_eq!(values, values_before);
    }
}

// ---------------------------------------------------------------------------
// Invariant 5: Formula results are finite
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn formula_results_are_finite(formula in arb_formula(), values in arb_values()) {
        if let Some(result) = evaluate_formula(&formula, &values) {
            prop_assert!(result.is_finite());
        }
    }
}
