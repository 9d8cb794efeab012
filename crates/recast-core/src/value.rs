//! The in-memory value tree produced by the JSON parser and consumed by the
//! YAML and TOML emitters.
//!
//! Objects are `Vec<(String, Value)>` rather than a map so that key insertion
//! order is preserved end to end without depending on `IndexMap`. Integers and
//! floats are separate variants: the distinction is made lexically at parse
//! time (`5` vs `5.0`) and both emitters keep it visible in their output.

/// A parsed JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    /// Integer literal — no fractional part, no exponent.
    Int(i64),
    /// Literal containing a `.` or an exponent marker.
    Float(f64),
    Str(String),
    Array(Vec<Value>),
    /// Key-value pairs in insertion order. Keys are unique within one object;
    /// the parser resolves duplicates as last-write-wins.
    Object(Vec<(String, Value)>),
}

impl Value {
    /// True for every variant that is not a container.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::Array(_) | Value::Object(_))
    }

    pub fn as_object(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Object(pairs) => Some(pairs),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a key in an object value. Returns `None` for non-objects and
    /// missing keys alike.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

/// Render a float keeping the distinguishing decimal point: a finite value
/// with zero fraction prints with one decimal (`5.0`), so a parsed `5.0`
/// never collapses into the integer spelling on the way out.
pub(crate) fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e16 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}
