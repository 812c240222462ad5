use serde_json::{Map, Value};

use crate::core::data::ArgIdentity;

/// Arguments supplied to a render call.
#[derive(Debug, Clone, PartialEq)]
pub enum Args {
    Positional(Vec<Value>),
    Keyed(Map<String, Value>),
}

impl Default for Args {
    fn default() -> Self {
        Args::Positional(Vec::new())
    }
}

impl Args {
    pub fn none() -> Self {
        Self::default()
    }

    /// Value bound to `identity`.
    ///
    /// Keyed args also answer positional lookups through the index's decimal
    /// string (`{0}` reads key `"0"`); positional args never answer keyed lookups.
    pub fn get(&self, identity: &ArgIdentity) -> Option<&Value> {
        match (self, identity) {
            (Args::Positional(values), ArgIdentity::Positional(index)) => values.get(*index),
            (Args::Positional(_), ArgIdentity::Keyed(_)) => None,
            (Args::Keyed(map), ArgIdentity::Keyed(key)) => map.get(key),
            (Args::Keyed(map), ArgIdentity::Positional(index)) => map.get(&index.to_string()),
        }
    }
}

impl From<Vec<Value>> for Args {
    fn from(values: Vec<Value>) -> Self {
        Args::Positional(values)
    }
}

impl From<Map<String, Value>> for Args {
    fn from(map: Map<String, Value>) -> Self {
        Args::Keyed(map)
    }
}

/// String form of a value as inserted into rendered output.
///
/// Null renders empty, integral numbers render without a fractional part.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(display_float).unwrap_or_default()
            }
        }
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn display_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

/// Numeric reading of a value for plural selection.
///
/// Numbers as-is, numeric strings parsed; everything else has no numeric value.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
