use awj_core::CoreError;

/// Failure of a catalog loader run.
///
/// Every variant is fatal for the run that raised it; the surrounding
/// transaction is rolled back so the caller never observes partial state.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Malformed table or column declaration. Raised before any write.
    #[error(transparent)]
    Schema(CoreError),

    /// The store rejected the drop or create of a table.
    #[error("Failed to reset table '{table}': {source}")]
    Reset {
        table: String,
        #[source]
        source: sqlx::Error,
    },

    /// A record does not match its table's declared field types.
    #[error(transparent)]
    Encoding(CoreError),

    /// A row insert failed; `key` is the offending record's primary key.
    #[error("Failed to load record {key} into '{table}': {source}")]
    Load {
        table: String,
        key: String,
        #[source]
        source: sqlx::Error,
    },

    /// Opening, committing or closing the store failed.
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl From<CoreError> for CatalogError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Schema { .. } => CatalogError::Schema(err),
            CoreError::Encoding { .. } | CoreError::Decoding(_) => CatalogError::Encoding(err),
        }
    }
}
