use std::collections::BTreeSet;

use formlogic::{compute_derived_values, evaluate_formula, parse_formula, Calculation, Values};

#[test]
fn invoice_total() {
    let values = Values::new().set("rate", 50_i64).set("hours", 40_i64);
    assert_eq!(evaluate_formula("{{rate}} * {{hours}}", &values), Some(2000.0));
}

#[test]
fn missing_reference_counts_as_zero() {
    assert_eq!(evaluate_formula("{{missing}} + 5", &Values::new()), Some(5.0));
}

#[test]
fn non_numeric_source_counts_as_zero() {
    let values = Values::new().set("notes", "hello");
    assert_eq!(evaluate_formula("{{notes}} + 5", &values), Some(5.0));
}

#[test]
fn disallowed_token_rejected() {
    let values = Values::new().set("a", 1_i64);
    assert_eq!(evaluate_formula("{{a}}; alert(1)", &values), None);
    assert_eq!(evaluate_formula("{{a}} + window.x", &values), None);
}

#[test]
fn aggregates_over_question_scores() {
    let values = Values::new()
        .set("q1", 4_i64)
        .set("q2", 2_i64)
        .set("q3", 5_i64);
    assert_eq!(
        evaluate_formula("SUM({{q1}}, {{q2}}, {{q3}})", &values),
        Some(11.0)
    );
    assert_eq!(
        evaluate_formula("MIN({{q1}}, {{q2}}, {{q3}})", &values),
        Some(2.0)
    );
    assert_eq!(
        evaluate_formula("MAX({{q1}}, {{q2}}, {{q3}})", &values),
        Some(5.0)
    );
    assert_eq!(
        evaluate_formula("AVG({{q1}}, {{q2}}) + 1", &values),
        Some(4.0)
    );
}

#[test]
fn percentage_style_formula() {
    let values = Values::new().set("subtotal", 200_i64).set("tax-rate", 25_i64);
    assert_eq!(
        evaluate_formula("{{subtotal}} * {{tax-rate}} / 100", &values),
        Some(50.0)
    );
}

#[test]
fn non_finite_result_is_none() {
    let values = Values::new().set("n", 10_i64);
    assert_eq!(evaluate_formula("{{n}} / 0", &values), None);
    assert_eq!(evaluate_formula("0 / 0", &values), None);
}

#[test]
fn parser_reports_each_reference_once() {
    let refs = parse_formula("({{a}} + {{b}}) * {{a}} - {{ c }}");
    let expected: BTreeSet<String> = ["a", "b", "c"].iter().map(|s| (*s).into()).collect();
    assert_eq!(refs, expected);
}

#[test]
fn parser_on_plain_arithmetic_is_empty() {
    assert!(parse_formula("1 + 2 * 3").is_empty());
}

#[test]
fn derived_map_only_contains_successes() {
    let calcs = vec![
        Calculation::new("ok", "{{rate}} * 2", "double"),
        Calculation::new("broken", "{{rate}} *", "never"),
    ];
    let values = Values::new().set("rate", 21_i64);
    let derived = compute_derived_values(&calcs, &values);
    assert_eq!(derived.len(), 1);
    assert_eq!(derived.get("double"), Some(&42.0));
}

#[test]
fn host_loop_converges_multi_level_chain() {
    // total depends on subtotal which depends on rate/hours, but total is
    // declared FIRST. A single pass cannot see subtotal; the host merges and
    // re-runs, which converges on the second pass.
    let calcs = vec![
        Calculation::new("c-total", "{{subtotal}} + 10", "total"),
        Calculation::new("c-subtotal", "{{rate}} * {{hours}}", "subtotal"),
    ];
    let mut values = Values::new().set("rate", 5_i64).set("hours", 8_i64);

    let first = compute_derived_values(&calcs, &values);
    assert_eq!(first.get("subtotal"), Some(&40.0));
    assert_eq!(first.get("total"), Some(&10.0), "stale within the first pass");

    values.merge_derived(&first);
    let second = compute_derived_values(&calcs, &values);
    assert_eq!(second.get("total"), Some(&50.0));

    // Fixed point: a third pass changes nothing.
    values.merge_derived(&second);
    let third = compute_derived_values(&calcs, &values);
    assert_eq!(third, second);
}

#[test]
fn repeated_evaluation_is_deterministic() {
    let values = Values::new().set("a", 3_i64).set("b", 4_i64);
    let first = evaluate_formula("{{a}} * {{a}} + {{b}} * {{b}}", &values);
    for _ in 0..10 {
        assert_eq!(
            evaluate_formula("{{a}} * {{a}} + {{b}} * {{b}}", &values),
            first
        );
    }
}
