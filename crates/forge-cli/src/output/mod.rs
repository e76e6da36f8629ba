use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Columns shown when a list of entities is rendered as a table. Nested
/// analysis objects are summarized by their scores instead of raw JSON.
const PREFERRED_COLUMNS: &[&str] = &[
    "id",
    "name",
    "title",
    "projectName",
    "category",
    "source",
    "createdAt",
];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = flatten_object("", &map);
            Ok(table::render_entity_table(&headers, &rows, options()))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options()))
        }
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options());
    }

    let headers = columns(items);
    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| lookup(map, header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options())
}

/// Preferred identity columns, then every scalar score of `analysis`, then
/// any remaining scalar top-level field.
fn columns(items: &[Value]) -> Vec<String> {
    let mut headers = Vec::<String>::new();
    let mut push = |key: String| {
        if !headers.contains(&key) {
            headers.push(key);
        }
    };

    for column in PREFERRED_COLUMNS {
        if items.iter().any(|item| item.get(*column).is_some()) {
            push((*column).to_string());
        }
    }
    for item in items {
        if let Some(analysis) = item.get("analysis").and_then(Value::as_object) {
            for (key, value) in analysis {
                if value.is_number() || value.is_string() {
                    push(format!("analysis.{key}"));
                }
            }
        }
        if let Some(verdict) = item.pointer("/sipAnalysis/verdict")
            && verdict.is_string()
        {
            push("sipAnalysis.verdict".to_string());
        }
    }
    for item in items.iter().filter_map(Value::as_object) {
        for (key, value) in item {
            if !value.is_object() && !value.is_array() {
                push(key.clone());
            }
        }
    }
    headers
}

fn lookup<'a>(map: &'a serde_json::Map<String, Value>, header: &str) -> Option<&'a Value> {
    match header.split_once('.') {
        Some((outer, inner)) => map.get(outer)?.get(inner),
        None => map.get(header),
    }
}

fn flatten_object(prefix: &str, map: &serde_json::Map<String, Value>) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(inner) => rows.extend(flatten_object(&path, inner)),
            other => rows.push(vec![path, value_to_cell(other)]),
        }
    }
    rows
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
