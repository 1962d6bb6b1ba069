use std::fmt;

use serde::{Deserialize, Serialize};

/// A form field value as supplied by the host layer.
///
/// Mirrors the JSON value space of a form submission: scalars, arrays of
/// selected options, or null for unanswered fields. A missing entry in a
/// [`Values`](super::Values) map is treated the same as [`Value::Null`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    /// A boolean, e.g. from a consent toggle.
    Bool(bool),
    /// A 64-bit floating-point number. Integers share this variant.
    Number(f64),
    /// A UTF-8 string.
    Str(String),
    /// An ordered list, e.g. checkbox selections.
    List(Vec<Value>),
}

impl Value {
    /// Numeric coercion used by ordering operators and formula substitution.
    ///
    /// Non-numeric values coerce to `0.0`: unparseable strings, nulls, and
    /// lists all count as zero so a single unset field cannot poison a whole
    /// calculation. Booleans coerce to `1.0`/`0.0`.
    #[must_use]
    pub fn as_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            // f64::from_str accepts "inf" and "nan"; those are not numeric
            // answers and coerce to zero like any other unparseable string.
            Value::Str(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => n,
                _ => 0.0,
            },
            Value::Null | Value::List(_) => 0.0,
        }
    }

    /// True for null, the empty string, and the empty list.
    ///
    /// `0` and `false` are NOT empty; an answered field stays answered even
    /// when the answer is falsy.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Str(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }

    /// Positive presence predicate: the field holds a usable answer.
    ///
    /// Deliberately written as its own predicate rather than a negation of
    /// [`is_empty`](Self::is_empty) so the zero/false edge cases stay explicit.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Value::Bool(_) | Value::Number(_) => true,
            Value::Str(s) => !s.is_empty(),
            Value::List(items) => !items.is_empty(),
            Value::Null => false,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Textual rendering used when a value is matched against string content.
    pub(crate) fn to_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => fmt_number(*n),
            Value::Str(s) => s.clone(),
            Value::List(items) => {
                let parts: Vec<String> = items.iter().map(Value::to_text).collect();
                parts.join(",")
            }
        }
    }
}

/// Render a number without a trailing `.0` for whole values, matching the
/// form the host writes into JSON and formula text.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn fmt_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::List(v.into_iter().map(Value::Str).collect())
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Value::List(v.into_iter().map(Value::from).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Number(v) => write!(f, "{}", fmt_number(*v)),
            Value::Str(v) => write!(f, "\"{v}\""),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}
