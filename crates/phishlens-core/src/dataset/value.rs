//! A single CSV cell.

use std::cmp::Ordering;
use std::fmt;

/// Cell value inferred from its text: numeric when it parses as `f64`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Missing,
}

impl Value {
    /// Classify raw cell text. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Value {
        let s = raw.trim();
        if s.is_empty() {
            return Value::Missing;
        }
        match s.parse::<f64>() {
            Ok(n) if n.is_finite() => Value::Number(n),
            _ => Value::Text(s.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Total order used for label sets: missing, then numbers, then text.
    pub(crate) fn total_cmp(&self, other: &Value) -> Ordering {
        fn rank(v: &Value) -> u8 {
            match v {
                Value::Missing => 0,
                Value::Number(_) => 1,
                Value::Text(_) => 2,
            }
        }
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            _ => rank(self).cmp(&rank(other)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // -1.0 renders as "-1" so integer-coded labels read naturally.
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
            Value::Missing => Ok(()),
        }
    }
}
