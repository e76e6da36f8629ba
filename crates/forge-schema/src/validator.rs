//! Check and coerce raw model replies.
//!
//! ```text
//! raw text ─► strip fence ─► parse ─► walk schema ─► typed payload
//!                              │          │  clamp scores
//!                          Parse error    │  canonical enum spelling
//!                                         │  drop null optionals
//!                                 Schema / Validation error
//! ```

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use forge_core::entities::SipAnalysis;
use forge_core::payloads::{
    AutomationPayload, GeneratedIdeaPayload, IdeaAnalysisPayload, RiskPayload, SolutionPayload,
    TimelinePayload,
};

use crate::domains;
use crate::error::ResponseError;
use crate::field::{Field, FieldKind, ResponseSchema};

/// A typed reply bound to the schema it is validated against.
pub trait Payload: DeserializeOwned {
    const SCHEMA: &'static ResponseSchema;
}

impl Payload for AutomationPayload {
    const SCHEMA: &'static ResponseSchema = &domains::AUTOMATION;
}

impl Payload for GeneratedIdeaPayload {
    const SCHEMA: &'static ResponseSchema = &domains::GENERATED_IDEA;
}

impl Payload for IdeaAnalysisPayload {
    const SCHEMA: &'static ResponseSchema = &domains::IDEA_ANALYSIS;
}

impl Payload for SipAnalysis {
    const SCHEMA: &'static ResponseSchema = &domains::SIP_EVALUATION;
}

impl Payload for RiskPayload {
    const SCHEMA: &'static ResponseSchema = &domains::RISK;
}

impl Payload for TimelinePayload {
    const SCHEMA: &'static ResponseSchema = &domains::TIMELINE;
}

impl Payload for SolutionPayload {
    const SCHEMA: &'static ResponseSchema = &domains::SOLUTION;
}

/// Validate a raw reply and deserialize it into `P`.
///
/// # Errors
///
/// Returns `ResponseError::Parse` for non-JSON text, `ResponseError::Schema`
/// for a missing or mistyped field, and `ResponseError::Validation` for an
/// enum value outside its allowed set.
pub fn validate<P: Payload>(raw: &str) -> Result<P, ResponseError> {
    let value = validate_value(raw, P::SCHEMA)?;
    serde_json::from_value(value).map_err(|e| ResponseError::Schema {
        path: "$".to_string(),
        expected: P::SCHEMA.name.to_string(),
        found: e.to_string(),
    })
}

/// Validate a raw reply against `schema` and return the coerced JSON.
///
/// # Errors
///
/// See [`validate`].
pub fn validate_value(raw: &str, schema: &ResponseSchema) -> Result<Value, ResponseError> {
    let text = strip_code_fence(raw);
    let mut value: Value =
        serde_json::from_str(text).map_err(|e| ResponseError::Parse(e.to_string()))?;

    let found = kind_name(&value);
    let Value::Object(map) = &mut value else {
        return Err(ResponseError::Schema {
            path: "$".to_string(),
            expected: "object".to_string(),
            found: found.to_string(),
        });
    };
    check_object(map, schema.fields, "")?;

    tracing::debug!(schema = schema.name, "reply validated");
    Ok(value)
}

/// Remove one surrounding Markdown code fence, with or without a language tag.
#[must_use]
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string (`json`) on the opening line.
    match body.find('\n') {
        Some(newline) => body[newline + 1..].trim(),
        None => body.trim(),
    }
}

/// Round to the nearest integer and clamp into `[1, 100]`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp_score(raw: f64) -> u8 {
    raw.round().clamp(1.0, 100.0) as u8
}

fn check_object(
    map: &mut Map<String, Value>,
    fields: &[Field],
    path: &str,
) -> Result<(), ResponseError> {
    for field in fields {
        let child = join(path, field.name);

        if !field.required && map.get(field.name).is_some_and(Value::is_null) {
            map.remove(field.name);
            continue;
        }

        let Some(value) = map.get_mut(field.name) else {
            if field.required {
                return Err(ResponseError::Schema {
                    path: child,
                    expected: field.kind.expected(),
                    found: "nothing".to_string(),
                });
            }
            continue;
        };

        check_value(value, field.kind, &child)?;
    }
    Ok(())
}

fn check_value(value: &mut Value, kind: FieldKind, path: &str) -> Result<(), ResponseError> {
    match kind {
        FieldKind::Score => {
            let n = finite_number(value, kind, path)?;
            *value = Value::from(clamp_score(n));
        }
        FieldKind::Number => {
            finite_number(value, kind, path)?;
        }
        FieldKind::Text => {
            if !value.is_string() {
                return Err(mismatch(value, kind, path));
            }
        }
        FieldKind::Enum(allowed) => {
            let Some(raw) = value.as_str() else {
                return Err(mismatch(value, kind, path));
            };
            let Some(canonical) = allowed
                .iter()
                .find(|candidate| candidate.eq_ignore_ascii_case(raw.trim()))
            else {
                return Err(ResponseError::Validation {
                    path: path.to_string(),
                    value: raw.to_string(),
                    allowed: allowed.iter().map(ToString::to_string).collect(),
                });
            };
            *value = Value::from(*canonical);
        }
        FieldKind::TextList => {
            let Some(items) = value.as_array() else {
                return Err(mismatch(value, kind, path));
            };
            if let Some(i) = items.iter().position(|item| !item.is_string()) {
                let item = &items[i];
                return Err(ResponseError::Schema {
                    path: format!("{path}[{i}]"),
                    expected: "string".to_string(),
                    found: kind_name(item).to_string(),
                });
            }
        }
        FieldKind::Object(fields) => {
            let found = kind_name(value);
            let Some(map) = value.as_object_mut() else {
                return Err(ResponseError::Schema {
                    path: path.to_string(),
                    expected: kind.expected(),
                    found: found.to_string(),
                });
            };
            check_object(map, fields, path)?;
        }
        FieldKind::ObjectList(fields) => {
            let found = kind_name(value);
            let Some(items) = value.as_array_mut() else {
                return Err(ResponseError::Schema {
                    path: path.to_string(),
                    expected: kind.expected(),
                    found: found.to_string(),
                });
            };
            for (i, item) in items.iter_mut().enumerate() {
                let item_path = format!("{path}[{i}]");
                let found = kind_name(item);
                let Some(map) = item.as_object_mut() else {
                    return Err(ResponseError::Schema {
                        path: item_path,
                        expected: "object".to_string(),
                        found: found.to_string(),
                    });
                };
                check_object(map, fields, &item_path)?;
            }
        }
    }
    Ok(())
}

fn finite_number(value: &Value, kind: FieldKind, path: &str) -> Result<f64, ResponseError> {
    match value.as_f64() {
        Some(n) if n.is_finite() => Ok(n),
        Some(_) => Err(ResponseError::Schema {
            path: path.to_string(),
            expected: kind.expected(),
            found: "non-finite number".to_string(),
        }),
        None => Err(mismatch(value, kind, path)),
    }
}

fn mismatch(value: &Value, kind: FieldKind, path: &str) -> ResponseError {
    ResponseError::Schema {
        path: path.to_string(),
        expected: kind.expected(),
        found: kind_name(value).to_string(),
    }
}

const fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}
