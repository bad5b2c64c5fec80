//! Serialises a [`Value`] tree back to JSON5-compatible text.
//!
//! The formatter always emits a pure-JSON subset (quoted keys, no
//! comments, no trailing commas) so its output parses back through any
//! conforming JSON5 or JSON reader.

use std::fmt::Write as _;

use json5_util::FormatError;

use crate::value::Value;

/// Serialises `value` to a `String`.
///
/// `indent` selects the output style: `None` produces the most compact
/// form; `Some(width)` pretty-prints with `width` spaces per nesting
/// level.
pub fn format(value: &Value, indent: Option<usize>) -> Result<String, FormatError> {
    let mut out = String::new();
    write_value(&mut out, value, indent, 0)?;
    Ok(out)
}

fn write_value(
    out: &mut String,
    value: &Value,
    indent: Option<usize>,
    depth: usize,
) -> Result<(), FormatError> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(i) => {
            let _ = write!(out, "{i}");
        }
        Value::Float(f) => write_float(out, *f)?,
        Value::Str(s) => write_string(out, s),
        Value::Array(items) => write_array(out, items, indent, depth)?,
        Value::Object(obj) => write_object(out, obj, indent, depth)?,
    }
    Ok(())
}

fn write_float(out: &mut String, f: f64) -> Result<(), FormatError> {
    if !f.is_finite() {
        return Err(FormatError::NonFiniteNumber);
    }
    let mut buf = ryu::Buffer::new();
    out.push_str(buf.format_finite(f));
    Ok(())
}

/// Writes `s` as a double-quoted JSON string, escaping `"`, `\`, and
/// control characters with the shortest standard escape.
fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn write_array(
    out: &mut String,
    items: &[Value],
    indent: Option<usize>,
    depth: usize,
) -> Result<(), FormatError> {
    if items.is_empty() {
        out.push_str("[]");
        return Ok(());
    }

    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_separator(out, indent, depth + 1);
        write_value(out, item, indent, depth + 1)?;
    }
    write_separator(out, indent, depth);
    out.push(']');
    Ok(())
}

fn write_object(
    out: &mut String,
    object: &crate::value::Object,
    indent: Option<usize>,
    depth: usize,
) -> Result<(), FormatError> {
    if object.is_empty() {
        out.push_str("{}");
        return Ok(());
    }

    out.push('{');
    for (i, (key, value)) in object.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_separator(out, indent, depth + 1);
        write_string(out, key);
        out.push(':');
        if indent.is_some() {
            out.push(' ');
        }
        write_value(out, value, indent, depth + 1)?;
    }
    write_separator(out, indent, depth);
    out.push('}');
    Ok(())
}

/// Writes a newline plus `depth * width` spaces when indenting; nothing
/// in compact mode.
fn write_separator(out: &mut String, indent: Option<usize>, depth: usize) {
    if let Some(width) = indent {
        out.push('\n');
        out.push_str(&" ".repeat(width * depth));
    }
}
