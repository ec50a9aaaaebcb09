//! Record Encoder.
//!
//! Turns a [`Record`] into an [`EncodedRow`] whose values follow the
//! schema's column order. List columns become a JSON array in a single
//! TEXT value, boolean columns become 0/1, absent or null values become
//! `NULL`. Nothing is trimmed, reordered or deduplicated.

use serde_json::Value;

use crate::error::CoreError;
use crate::record::{describe_key, EncodedRow, Record, SqlValue};
use crate::schema::{Column, ColumnType, TableSchema};

/// Encode one record against its table schema.
pub fn encode(schema: &TableSchema, record: &Record) -> Result<EncodedRow, CoreError> {
    let key = describe_key(record, &schema.primary_key().name);

    let values = schema
        .columns()
        .iter()
        .map(|column| {
            encode_value(column, record.get(&column.name)).map_err(|reason| {
                CoreError::Encoding {
                    table: schema.name().to_string(),
                    key: key.clone(),
                    field: column.name.clone(),
                    reason,
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(EncodedRow { key, values })
}

/// Encode a batch, stopping at the first malformed record.
pub fn encode_all(schema: &TableSchema, records: &[Record]) -> Result<Vec<EncodedRow>, CoreError> {
    records.iter().map(|record| encode(schema, record)).collect()
}

/// Record fields that have no matching column and will not be stored.
pub fn undeclared_fields<'a>(schema: &TableSchema, record: &'a Record) -> Vec<&'a str> {
    record
        .keys()
        .filter(|field| schema.column(field).is_none())
        .map(String::as_str)
        .collect()
}

/// Serialize an ordered list of strings as a JSON array.
///
/// Non-ASCII text is written verbatim, not `\u`-escaped.
pub fn encode_list<S: AsRef<str>>(items: &[S]) -> String {
    Value::Array(
        items
            .iter()
            .map(|item| Value::String(item.as_ref().to_string()))
            .collect(),
    )
    .to_string()
}

/// Decode a stored list column. `NULL` and the empty string decode to an
/// empty list.
pub fn decode_list(stored: Option<&str>) -> Result<Vec<String>, CoreError> {
    match stored {
        None => Ok(Vec::new()),
        Some(text) if text.is_empty() => Ok(Vec::new()),
        Some(text) => Ok(serde_json::from_str(text)?),
    }
}

pub fn encode_bool(value: bool) -> i64 {
    i64::from(value)
}

/// `None` for anything other than 0 or 1.
pub fn decode_bool(stored: i64) -> Option<bool> {
    match stored {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    }
}

fn encode_value(column: &Column, value: Option<&Value>) -> Result<SqlValue, String> {
    let value = match value {
        None | Some(Value::Null) => {
            return if column.is_nullable() {
                Ok(SqlValue::Null)
            } else {
                Err("required value is missing".to_string())
            };
        }
        Some(value) => value,
    };

    match column.column_type {
        ColumnType::Text => match value {
            Value::String(s) => Ok(SqlValue::Text(s.clone())),
            other => Err(mismatch("text", other)),
        },
        ColumnType::Integer => match value.as_i64() {
            Some(n) => Ok(SqlValue::Integer(n)),
            None => Err(mismatch("integer", value)),
        },
        ColumnType::Real => match value.as_f64() {
            Some(r) => Ok(SqlValue::Real(r)),
            None => Err(mismatch("number", value)),
        },
        ColumnType::Boolean => match value {
            Value::Bool(b) => Ok(SqlValue::Integer(encode_bool(*b))),
            Value::Number(n) => match n.as_i64().and_then(decode_bool) {
                Some(b) => Ok(SqlValue::Integer(encode_bool(b))),
                None => Err(format!("expected boolean or 0/1, got {n}")),
            },
            other => Err(mismatch("boolean", other)),
        },
        ColumnType::List => match value {
            Value::Array(items) => {
                let strings = items
                    .iter()
                    .enumerate()
                    .map(|(idx, item)| match item {
                        Value::String(s) => Ok(s.as_str()),
                        other => Err(format!(
                            "list element {idx} is {}, expected string",
                            kind(other)
                        )),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(SqlValue::Text(encode_list(&strings)))
            }
            other => Err(mismatch("list of strings", other)),
        },
    }
}

fn mismatch(expected: &str, got: &Value) -> String {
    format!("expected {expected}, got {}", kind(got))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
