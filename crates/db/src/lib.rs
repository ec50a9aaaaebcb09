//! SQLite side of the catalog bootstrap.
//!
//! - [`reset`]: Reset Policy (`HardReset` / `SoftEnsure`).
//! - [`bulk`]: Bulk Loader with explicit conflict policies.
//! - [`store`]: Connection Lifecycle and the per-loader [`SeedPlan`] run.
//! - [`repositories`]: the append-only contact request mailbox.

pub mod bulk;
pub mod ddl;
pub mod error;
pub mod models;
pub mod repositories;
pub mod reset;
pub mod store;

pub use bulk::{count_rows, load, LoadSummary};
pub use error::CatalogError;
pub use reset::{ensure_clean_table, table_exists, ResetOutcome};
pub use store::{seed_store, SeedPlan, SeedReport, Store};

pub type DbConnection = sqlx::SqliteConnection;

/// Verify the store answers queries.
pub async fn health_check(conn: &mut DbConnection) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(conn).await?;
    Ok(())
}
