//! YAML emitter — renders a [`Value`] tree as indented YAML text.
//!
//! - **Objects**: `key:` at the current indent; scalar values inline after a
//!   single space, container values on the following lines one indent deeper.
//! - **Arrays**: `- ` at the current indent; a container element absorbs the
//!   marker into its first line.
//! - **Empty containers**: the `{}` / `[]` shorthand instead of an empty block.
//! - **Scalar quoting**: strings that YAML would re-read as a different
//!   scalar type (`true`, `no`, `3.14`, …) are single-quoted, with internal
//!   `'` doubled, so a round-trip through a YAML reader keeps them as strings.
//! - **Multiline strings**: block literals with a fixed `|2` indentation
//!   indicator and the body two spaces deeper than the key (the indicator is
//!   not recomputed from the actual depth — a deliberate simplification).

use crate::value::{format_float, Value};

/// Formatting knobs for [`to_yaml_with`].
#[derive(Debug, Clone)]
pub struct YamlOptions {
    /// Spaces added per nesting level.
    pub indent_size: usize,
    /// Quote strings that would otherwise be re-read as bools/nulls/numbers.
    pub preserve_quotes: bool,
}

impl Default for YamlOptions {
    fn default() -> Self {
        Self {
            indent_size: 2,
            preserve_quotes: true,
        }
    }
}

/// Render a value tree as YAML with default options.
pub fn to_yaml(value: &Value) -> String {
    to_yaml_with(value, &YamlOptions::default())
}

/// Render a value tree as YAML. Infallible: every [`Value`] shape has a YAML
/// spelling.
pub fn to_yaml_with(value: &Value, options: &YamlOptions) -> String {
    let mut out = String::new();
    emit_value(value, 0, options, &mut out);
    out
}

/// Top-level dispatch, also reused for container elements inside arrays.
fn emit_value(value: &Value, indent: usize, options: &YamlOptions, out: &mut String) {
    match value {
        Value::Object(pairs) if pairs.is_empty() => out.push_str("{}\n"),
        Value::Array(items) if items.is_empty() => out.push_str("[]\n"),
        Value::Object(pairs) => emit_object(pairs, indent, options, out),
        Value::Array(items) => emit_array(items, indent, options, out),
        scalar => {
            out.push_str(&format_scalar(scalar, options));
            out.push('\n');
        }
    }
}

fn emit_object(pairs: &[(String, Value)], indent: usize, options: &YamlOptions, out: &mut String) {
    for (key, value) in pairs {
        push_indent(indent, out);
        out.push_str(key);
        out.push(':');
        match value {
            Value::Object(pairs) if pairs.is_empty() => out.push_str(" {}\n"),
            Value::Array(items) if items.is_empty() => out.push_str(" []\n"),
            Value::Object(_) | Value::Array(_) => {
                out.push('\n');
                emit_value(value, indent + options.indent_size, options, out);
            }
            Value::Str(s) if s.contains('\n') => emit_block_literal(s, indent, out),
            scalar => {
                out.push(' ');
                out.push_str(&format_scalar(scalar, options));
                out.push('\n');
            }
        }
    }
}

fn emit_array(items: &[Value], indent: usize, options: &YamlOptions, out: &mut String) {
    for item in items {
        match item {
            Value::Object(_) | Value::Array(_) => {
                // Render the element one level deeper, then splice its first
                // line onto the "- " marker.
                let mut child = String::new();
                emit_value(item, indent + options.indent_size, options, &mut child);
                push_indent(indent, out);
                out.push_str("- ");
                out.push_str(child.trim_start_matches(' '));
            }
            Value::Str(s) if s.contains('\n') => {
                push_indent(indent, out);
                out.push('-');
                emit_block_literal(s, indent, out);
            }
            scalar => {
                push_indent(indent, out);
                out.push_str("- ");
                out.push_str(&format_scalar(scalar, options));
                out.push('\n');
            }
        }
    }
}

/// Block literal for multiline strings: ` |2` after the key (or `-` marker),
/// then every line of the string two spaces deeper than the owner.
fn emit_block_literal(text: &str, indent: usize, out: &mut String) {
    out.push_str(" |2\n");
    for line in text.split('\n') {
        push_indent(indent + 2, out);
        out.push_str(line);
        out.push('\n');
    }
}

fn format_scalar(value: &Value, options: &YamlOptions) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => if *b { "true" } else { "false" }.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => format_float(*f),
        Value::Str(s) => {
            if options.preserve_quotes && needs_quotes(s) {
                format!("'{}'", s.replace('\'', "''"))
            } else {
                s.clone()
            }
        }
        Value::Array(_) | Value::Object(_) => {
            unreachable!("containers are handled by the emit functions")
        }
    }
}

/// Would YAML re-read this bare string as a different scalar type?
fn needs_quotes(s: &str) -> bool {
    let lower = s.to_lowercase();
    matches!(
        lower.as_str(),
        "true" | "false" | "yes" | "no" | "null" | "none"
    ) || looks_like_number(s)
}

/// Bare integer/decimal literal: optional leading `-`, digits, at most one `.`.
fn looks_like_number(s: &str) -> bool {
    let rest = s.strip_prefix('-').unwrap_or(s);
    if rest.is_empty() {
        return false;
    }
    let mut seen_dot = false;
    let mut seen_digit = false;
    for b in rest.bytes() {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

fn push_indent(indent: usize, out: &mut String) {
    for _ in 0..indent {
        out.push(' ');
    }
}
