//! Records before and after encoding.

use serde_json::Value;

/// An in-memory catalog entry: field name to JSON value, as read from a
/// fixture file. Fields not declared in the table schema are ignored by
/// the encoder.
pub type Record = serde_json::Map<String, Value>;

/// A storage-ready scalar, bound positionally into an `INSERT`.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

/// The flat representation of one record, values in schema column order.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedRow {
    /// Primary key rendered for diagnostics (`<auto>` for store-assigned keys).
    pub key: String,
    pub values: Vec<SqlValue>,
}

impl EncodedRow {
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Render a record's key field for error messages, before it is encoded.
pub fn describe_key(record: &Record, key_field: &str) -> String {
    match record.get(key_field) {
        None | Some(Value::Null) => "<auto>".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
