//! Formula parsing and evaluation for calculated fields.
//!
//! A formula is a template string embedding `{{fieldId}}` references, e.g.
//! `"{{rate}} * {{hours}}"` or `"SUM({{q1}}, {{q2}}, {{q3}})"`. Evaluation
//! substitutes each reference with the numeric coercion of the current field
//! value, resolves the aggregate functions textually, and evaluates the
//! remaining arithmetic with a closed expression grammar.
//!
//! `{{fieldId}}` is the canonical reference syntax. Earlier schema revisions
//! also wrote single-brace `{fieldId}` and `@fieldId` references; those forms
//! are no longer parsed and authoring tooling migrates them on load.

mod grammar;

use std::collections::{BTreeMap, BTreeSet};

use crate::types::fmt_number;
use crate::{Calculation, Value, Values};

/// Extract the distinct field ids a formula references.
///
/// Order-insensitive, duplicates collapsed; whitespace inside the braces is
/// tolerated. Used by authoring tooling to discover and cross-check
/// dependency declarations.
#[must_use]
pub fn parse_formula(formula: &str) -> BTreeSet<String> {
    let mut refs = BTreeSet::new();
    let mut rest = formula;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        let id = after[..end].trim();
        if !id.is_empty() {
            refs.insert(id.to_owned());
        }
        rest = &after[end + 2..];
    }
    refs
}

/// Evaluate a formula against the current values.
///
/// Returns `None` when the formula is broken in any way: a disallowed
/// character survives substitution, an aggregate call is malformed, the
/// arithmetic does not parse, or the result is not finite. A broken formula
/// only loses its own result; it never panics or poisons other calculations.
#[must_use]
pub fn evaluate_formula(formula: &str, values: &Values) -> Option<f64> {
    let substituted = substitute_refs(formula, values);
    let resolved = apply_aggregates(&substituted)?;
    if !resolved.chars().all(is_allowed) {
        return None;
    }
    let result = grammar::evaluate(&resolved)?;
    result.is_finite().then_some(result)
}

/// Evaluate every calculation against the values snapshot, in declaration
/// order, returning the derived results keyed by target field id.
///
/// Each successful result is folded into a working copy of the snapshot, so a
/// later calculation in the same pass sees an earlier one's output. There is
/// no topological sorting: a calculation declared *before* its dependency
/// converges only after the host merges the outputs and re-invokes, which it
/// does on every value change anyway.
#[must_use]
pub fn compute_derived_values(
    calculations: &[Calculation],
    values: &Values,
) -> BTreeMap<String, f64> {
    let mut derived = BTreeMap::new();
    let mut current = values.clone();

    for calc in calculations {
        if let Some(result) = evaluate_formula(&calc.formula, &current) {
            derived.insert(calc.target_field_id.clone(), result);
            current.insert(calc.target_field_id.clone(), Value::Number(result));
        }
    }

    derived
}

/// Replace every `{{fieldId}}` with the numeric coercion of its value.
///
/// Missing or non-numeric sources substitute as `0`, favoring *some* result
/// over failing the whole computation. Values are rendered as bare numbers
/// before they touch the formula text, so field content cannot smuggle
/// syntax into the expression.
fn substitute_refs(formula: &str, values: &Values) -> String {
    let mut out = String::with_capacity(formula.len());
    let mut rest = formula;
    while let Some(start) = rest.find("{{") {
        let Some(end) = rest[start + 2..].find("}}") else {
            break;
        };
        out.push_str(&rest[..start]);
        let id = rest[start + 2..start + 2 + end].trim();
        let n = values.get(id).map_or(0.0, Value::as_number);
        out.push_str(&fmt_number(n));
        rest = &rest[start + 2 + end + 2..];
    }
    out.push_str(rest);
    out
}

const AGGREGATES: [&str; 4] = ["SUM", "AVG", "MIN", "MAX"];

/// Resolve `SUM(...)`, `AVG(...)`, `MIN(...)`, `MAX(...)` calls textually.
///
/// Single pass per function name, case-insensitive, arguments must be plain
/// comma-separated numbers (references were already substituted). Nested
/// calls are not supported and surface as a malformed argument list.
#[allow(clippy::cast_precision_loss)]
fn apply_aggregates(expr: &str) -> Option<String> {
    let mut out = expr.to_owned();
    for name in AGGREGATES {
        while let Some(start) = find_call(&out, name) {
            let open = start + name.len();
            let close = open + out[open..].find(')')?;
            let args = parse_args(&out[open + 1..close])?;
            let result = match name {
                "SUM" => args.iter().sum(),
                "AVG" => args.iter().sum::<f64>() / args.len() as f64,
                "MIN" => args.iter().copied().fold(f64::INFINITY, f64::min),
                _ => args.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            };
            out.replace_range(start..=close, &fmt_number(result));
        }
    }
    Some(out)
}

/// Case-insensitive search for `name(`. Byte offsets are stable because
/// ASCII lowercasing preserves length.
fn find_call(haystack: &str, name: &str) -> Option<usize> {
    let lower = haystack.to_ascii_lowercase();
    let needle = format!("{}(", name.to_ascii_lowercase());
    lower.find(&needle)
}

fn parse_args(args: &str) -> Option<Vec<f64>> {
    args.split(',')
        .map(|arg| arg.trim().parse::<f64>().ok())
        .collect()
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_digit()
        || c.is_ascii_whitespace()
        || matches!(c, '+' | '-' | '*' | '/' | '%' | '.' | '(' | ')')
}
