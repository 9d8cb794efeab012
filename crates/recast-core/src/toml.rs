//! TOML emitter — renders an object-rooted [`Value`] tree as TOML text.
//!
//! Each table body is emitted in three passes, and the order is load-bearing:
//! TOML attaches bare `key = value` lines to the most recent table header, so
//! scalars must come before any `[table]` or `[[array-of-tables]]` block.
//!
//! 1. Scalar pairs as `key = value` (nulls omitted — TOML has no null).
//! 2. Array pairs: arrays whose elements are all objects become
//!    `[[path]]` blocks in input order; anything else non-empty becomes an
//!    inline (or element-per-line) bracketed array. Empty arrays are skipped
//!    entirely, an asymmetry with the YAML emitter's `[]`.
//! 3. Object pairs as `[path]` table headers followed by the table body.
//!
//! The dotted `key_prefix` threaded through recursion builds header paths
//! only; value lines always carry the bare key. Plain-table recursion resets
//! the prefix, so only the first level of `[table]` headers under an
//! array-of-tables element is fully dotted — a known nesting limitation.

use crate::error::{RecastError, Result};
use crate::value::{format_float, Value};

/// Render an object-rooted value tree as TOML.
///
/// Fails with [`RecastError::Unsupported`] for a non-object root, for nulls
/// inside arrays, and for array elements TOML cannot spell (objects in a
/// mixed array, for instance).
pub fn to_toml(value: &Value) -> Result<String> {
    let Value::Object(pairs) = value else {
        return Err(RecastError::Unsupported(
            "TOML root must be an object".to_string(),
        ));
    };
    let mut lines = Vec::new();
    emit_table(pairs, "", &mut lines)?;
    Ok(lines.join("\n"))
}

/// Emit one table body. `key_prefix` is either empty or a dotted path ending
/// in `.`, ready to prepend to a child key for a header line.
fn emit_table(pairs: &[(String, Value)], key_prefix: &str, lines: &mut Vec<String>) -> Result<()> {
    // Pass 1: scalars. A null value is dropped, key and all.
    for (key, value) in pairs {
        if value.is_scalar() && !matches!(value, Value::Null) {
            lines.push(format!("{key} = {}", format_value(value)?));
        }
    }

    // Pass 2: arrays.
    for (key, value) in pairs {
        let Value::Array(items) = value else { continue };
        if items.is_empty() {
            continue;
        }
        if items.iter().all(|v| matches!(v, Value::Object(_))) {
            let path = format!("{key_prefix}{key}");
            for item in items {
                lines.push(String::new());
                lines.push(format!("[[{path}]]"));
                if let Value::Object(inner) = item {
                    emit_table(inner, &format!("{path}."), lines)?;
                }
            }
        } else {
            lines.push(format!("{key} = {}", format_array(items)?));
        }
    }

    // Pass 3: nested tables. The header alone carries the dotted path.
    for (key, value) in pairs {
        if let Value::Object(inner) = value {
            lines.push(String::new());
            lines.push(format!("[{key_prefix}{key}]"));
            emit_table(inner, "", lines)?;
        }
    }

    Ok(())
}

/// Format a single value for the right-hand side of `key = …`.
fn format_value(value: &Value) -> Result<String> {
    match value {
        Value::Str(s) => Ok(format_string(s)),
        Value::Bool(b) => Ok(if *b { "true" } else { "false" }.to_string()),
        Value::Int(i) => Ok(i.to_string()),
        Value::Float(f) => Ok(format_float(*f)),
        Value::Array(items) => format_array(items),
        Value::Null => Err(RecastError::Unsupported(
            "null cannot be represented as a TOML array element".to_string(),
        )),
        Value::Object(_) => Err(RecastError::Unsupported(
            "an object in this position has no TOML representation".to_string(),
        )),
    }
}

/// Triple quotes for multiline text, single quotes when the text embeds a
/// double quote, plain double quotes otherwise.
fn format_string(s: &str) -> String {
    if s.contains('\n') {
        format!("\"\"\"\n{s}\n\"\"\"")
    } else if s.contains('"') {
        format!("'{s}'")
    } else {
        format!("\"{s}\"")
    }
}

/// All-scalar arrays go on one line; anything else is bracketed with one
/// element per line.
fn format_array(items: &[Value]) -> Result<String> {
    let parts = items
        .iter()
        .map(format_value)
        .collect::<Result<Vec<_>>>()?;
    if items
        .iter()
        .all(|v| v.is_scalar() && !matches!(v, Value::Null))
    {
        Ok(format!("[{}]", parts.join(", ")))
    } else {
        Ok(format!("[\n  {}\n]", parts.join(",\n  ")))
    }
}
