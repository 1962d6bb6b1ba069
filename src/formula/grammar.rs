//! Arithmetic expression grammar for substituted formula text.
//!
//! Evaluation happens inside the parser: each production returns the numeric
//! value of what it matched. The grammar covers exactly the token set the
//! formula whitelist admits (numbers, `+ - * / %`, parentheses, unary minus),
//! so there is no code-execution facility for formula content to reach.

use winnow::ascii::multispace0;
use winnow::combinator::{alt, delimited, opt, preceded, repeat};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

/// Evaluate an arithmetic expression, `None` on any syntax error.
///
/// The whole input must parse; trailing garbage is an error, not ignored.
pub(crate) fn evaluate(input: &str) -> Option<f64> {
    terminated_expr.parse(input).ok()
}

fn terminated_expr(input: &mut &str) -> ModalResult<f64> {
    let value = expr(input)?;
    multispace0.parse_next(input)?;
    Ok(value)
}

// -- Precedence: expr (+ -) < term (* / %) < unary (-) < primary ------------

fn expr(input: &mut &str) -> ModalResult<f64> {
    let first = term(input)?;
    let rest: Vec<(char, f64)> =
        repeat(0.., (preceded(multispace0, one_of(['+', '-'])), term)).parse_next(input)?;
    Ok(rest.into_iter().fold(first, |acc, (op, rhs)| {
        if op == '+' {
            acc + rhs
        } else {
            acc - rhs
        }
    }))
}

fn term(input: &mut &str) -> ModalResult<f64> {
    let first = unary(input)?;
    let rest: Vec<(char, f64)> =
        repeat(0.., (preceded(multispace0, one_of(['*', '/', '%'])), unary)).parse_next(input)?;
    Ok(rest.into_iter().fold(first, |acc, (op, rhs)| match op {
        '*' => acc * rhs,
        '/' => acc / rhs,
        _ => acc % rhs,
    }))
}

fn unary(input: &mut &str) -> ModalResult<f64> {
    multispace0.parse_next(input)?;
    if opt('-').parse_next(input)?.is_some() {
        Ok(-unary(input)?)
    } else {
        primary(input)
    }
}

fn primary(input: &mut &str) -> ModalResult<f64> {
    multispace0.parse_next(input)?;
    alt((delimited('(', expr, (multispace0, ')')), number)).parse_next(input)
}

fn number(input: &mut &str) -> ModalResult<f64> {
    take_while(1.., |c: char| c.is_ascii_digit() || c == '.')
        .try_map(str::parse::<f64>)
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::evaluate;

    #[test]
    fn basic_arithmetic() {
        assert_eq!(evaluate("50 * 40"), Some(2000.0));
        assert_eq!(evaluate("0 + 5"), Some(5.0));
        assert_eq!(evaluate("10 - 4 - 3"), Some(3.0));
        assert_eq!(evaluate("7 % 3"), Some(1.0));
    }

    #[test]
    fn precedence_and_grouping() {
        assert_eq!(evaluate("2 + 3 * 4"), Some(14.0));
        assert_eq!(evaluate("(2 + 3) * 4"), Some(20.0));
        assert_eq!(evaluate("((1))"), Some(1.0));
    }

    #[test]
    fn unary_minus() {
        assert_eq!(evaluate("-4 * 2"), Some(-8.0));
        assert_eq!(evaluate("5 - -3"), Some(8.0));
        assert_eq!(evaluate("--2"), Some(2.0));
    }

    #[test]
    fn decimals() {
        assert_eq!(evaluate("1.5 * 2"), Some(3.0));
        assert_eq!(evaluate("0.1 + 0.2"), Some(0.1 + 0.2));
    }

    #[test]
    fn division_by_zero_is_not_an_error_here() {
        // The caller filters non-finite results; the grammar just computes.
        assert_eq!(evaluate("1 / 0"), Some(f64::INFINITY));
    }

    #[test]
    fn syntax_errors() {
        assert_eq!(evaluate(""), None);
        assert_eq!(evaluate("1 +"), None);
        assert_eq!(evaluate("(1 + 2"), None);
        assert_eq!(evaluate("1 2"), None);
        assert_eq!(evaluate("1.2.3"), None);
        assert_eq!(evaluate("abc"), None);
        assert_eq!(evaluate("1; 2"), None);
    }

    #[test]
    fn surrounding_whitespace() {
        assert_eq!(evaluate("  1 + 1  "), Some(2.0));
    }
}
