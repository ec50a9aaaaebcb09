use std::path::PathBuf;

use awj_db::CatalogError;

use crate::config::ConfigError;

/// Errors from a seed binary, wrapping the catalog taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read fixture {}: {source}", path.display())]
    FixtureIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fixture is not a JSON array of objects.
    #[error("Malformed fixture for table '{table}': {source}")]
    Fixture {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
