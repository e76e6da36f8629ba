//! Response shapes declared as data.

use std::fmt::Write as _;

/// Kind of value a response field must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Number clamped into `[1, 100]` and stored as an integer.
    Score,
    /// Any finite number, kept as given.
    Number,
    Text,
    /// String from a fixed set, matched case-insensitively. The first
    /// spelling in the table is canonical.
    Enum(&'static [&'static str]),
    TextList,
    Object(&'static [Field]),
    ObjectList(&'static [Field]),
}

impl FieldKind {
    /// Human-readable name used in `ResponseError::Schema::expected`.
    #[must_use]
    pub fn expected(self) -> String {
        match self {
            Self::Score => "score (1-100)".to_string(),
            Self::Number => "number".to_string(),
            Self::Text => "string".to_string(),
            Self::Enum(allowed) => format!("one of {}", enum_literal(allowed)),
            Self::TextList => "array of strings".to_string(),
            Self::Object(_) => "object".to_string(),
            Self::ObjectList(_) => "array of objects".to_string(),
        }
    }
}

/// One key of a response object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl Field {
    #[must_use]
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    #[must_use]
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// The full expected shape of one kind of reply. The root is always an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseSchema {
    pub name: &'static str,
    pub fields: &'static [Field],
}

/// Render a response schema as the JSON template embedded in prompts.
///
/// ```text
/// {
///   "analysis": {
///     "severity": "high" | "medium" | "low"
///   },
///   "recommendations": ["string"]
/// }
/// ```
#[must_use]
pub fn describe(schema: &ResponseSchema) -> String {
    let mut out = String::new();
    write_object(&mut out, schema.fields, 0);
    out
}

fn write_object(out: &mut String, fields: &[Field], depth: usize) {
    out.push_str("{\n");
    for (i, field) in fields.iter().enumerate() {
        indent(out, depth + 1);
        let _ = write!(out, "\"{}\": ", field.name);
        write_kind(out, field.kind, depth + 1);
        if !field.required {
            out.push_str(" (optional)");
        }
        if i + 1 < fields.len() {
            out.push(',');
        }
        out.push('\n');
    }
    indent(out, depth);
    out.push('}');
}

fn write_kind(out: &mut String, kind: FieldKind, depth: usize) {
    match kind {
        FieldKind::Score => out.push_str("number (1-100)"),
        FieldKind::Number => out.push_str("number"),
        FieldKind::Text => out.push_str("\"string\""),
        FieldKind::Enum(allowed) => out.push_str(&enum_literal(allowed)),
        FieldKind::TextList => out.push_str("[\"string\"]"),
        FieldKind::Object(fields) => write_object(out, fields, depth),
        FieldKind::ObjectList(fields) => {
            out.push_str("[\n");
            indent(out, depth + 1);
            write_object(out, fields, depth + 1);
            out.push('\n');
            indent(out, depth);
            out.push(']');
        }
    }
}

fn enum_literal(allowed: &[&str]) -> String {
    allowed
        .iter()
        .map(|value| format!("\"{value}\""))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}
