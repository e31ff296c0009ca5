use async_graphql_parser::Positioned;
use async_graphql_value::{ConstValue, Value};
use itertools::Itertools;

use crate::EvaluationError;

/// A value expression taken from the schema. Schema-level evaluation never has
/// runtime variables available, so anything referencing one fails.
pub trait Evaluable {
    fn evaluate(&self) -> Result<ConstValue, EvaluationError>;
}

impl Evaluable for ConstValue {
    fn evaluate(&self) -> Result<ConstValue, EvaluationError> {
        Ok(self.clone())
    }
}

impl Evaluable for Value {
    fn evaluate(&self) -> Result<ConstValue, EvaluationError> {
        self.clone()
            .into_const_with(|name| Err(EvaluationError::new(format!("variable ${name} is not defined"))))
    }
}

impl<T: Evaluable> Evaluable for Positioned<T> {
    fn evaluate(&self) -> Result<ConstValue, EvaluationError> {
        self.node.evaluate()
    }
}

/// Renders an evaluated value as a Go literal expression.
pub(crate) fn render_literal(value: &ConstValue) -> String {
    let mut out = String::new();
    write_literal(value, &mut out);
    out
}

fn write_literal(value: &ConstValue, out: &mut String) {
    match value {
        ConstValue::Null => out.push_str("nil"),
        ConstValue::Boolean(boolean) => out.push_str(if *boolean { "true" } else { "false" }),
        ConstValue::Number(number) => {
            if let Some(int) = number.as_i64() {
                out.push_str(&int.to_string());
            } else if let Some(uint) = number.as_u64() {
                out.push_str(&uint.to_string());
            } else {
                out.push_str(&format!("{:.6}", number.as_f64().unwrap_or_default()));
            }
        }
        ConstValue::String(string) => quote_into(string, out),
        ConstValue::Enum(name) => quote_into(name.as_str(), out),
        ConstValue::Binary(bytes) => quote_into(&String::from_utf8_lossy(bytes), out),
        ConstValue::List(items) => {
            out.push_str("[]interface{}{");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_literal(item, out);
            }
            out.push('}');
        }
        ConstValue::Object(fields) => {
            let mut fields = fields.iter().collect::<Vec<_>>();
            fields.sort_by(|(a, _), (b, _)| a.as_str().cmp(b.as_str()));

            out.push_str("map[string]interface{}{");
            for (key, field) in fields {
                quote_into(key.as_str(), out);
                out.push(':');
                write_literal(field, out);
                out.push(',');
            }
            out.push('}');
        }
    }
}

/// Renders an evaluated value as a Go expression of `go_type`, the type as it reads in
/// generated code. Lists become typed slice literals, a single value given for a list is
/// wrapped into one, and non-null slice elements of pointer type are addressed through a
/// typed local.
pub(crate) fn render_typed_literal(value: &ConstValue, go_type: &str) -> String {
    if matches!(value, ConstValue::Null) {
        return String::from("nil");
    }

    if let Some(element) = go_type.strip_prefix("[]") {
        let items = match value {
            ConstValue::List(items) => items.as_slice(),
            single => std::slice::from_ref(single),
        };

        return format!(
            "{go_type}{{{}}}",
            items.iter().map(|item| render_typed_literal(item, element)).join(", ")
        );
    }

    if let Some(pointee) = go_type.strip_prefix('*') {
        return format!(
            "func() {go_type} {{ var v {pointee} = {}; return &v }}()",
            render_typed_literal(value, pointee)
        );
    }

    render_literal(value)
}

/// Go interpreted string literal. Control characters, non-ASCII spaces and invisible format
/// characters are escaped as `strconv.Quote` escapes them.
pub(crate) fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    quote_into(value, &mut out);
    out
}

fn quote_into(value: &str, out: &mut String) {
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\u{0b}' => out.push_str("\\v"),
            ch if (ch as u32) < 0x20 || ch == '\u{7f}' => out.push_str(&format!("\\x{:02x}", ch as u32)),
            ch if !is_printable(ch) => {
                if (ch as u32) < 0x10000 {
                    out.push_str(&format!("\\u{:04x}", ch as u32));
                } else {
                    out.push_str(&format!("\\U{:08x}", ch as u32));
                }
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
}

fn is_printable(ch: char) -> bool {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') {
        return false;
    }

    !matches!(
        ch,
        '\u{ad}'
            | '\u{600}'..='\u{605}'
            | '\u{61c}'
            | '\u{6dd}'
            | '\u{70f}'
            | '\u{180e}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{e000}'..='\u{f8ff}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
            | '\u{f0000}'..='\u{10ffff}'
    )
}
