/// Errors raised by the pure catalog logic, before any I/O happens.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A table or column declaration is malformed.
    #[error("Invalid schema for table '{table}': {reason}")]
    Schema { table: String, reason: String },

    /// A record does not match the declared field types of its table.
    #[error("Cannot encode record {key} of table '{table}', field '{field}': {reason}")]
    Encoding {
        table: String,
        key: String,
        field: String,
        reason: String,
    },

    /// A stored list column does not hold a JSON array of strings.
    #[error("Malformed list value: {0}")]
    Decoding(#[from] serde_json::Error),
}

impl CoreError {
    pub(crate) fn schema(table: &str, reason: impl Into<String>) -> Self {
        Self::Schema {
            table: table.to_string(),
            reason: reason.into(),
        }
    }
}
