//! Reset Policy: bring a table to a known state before seeding.

use awj_core::{ResetPolicy, TableSchema};
use sqlx::{Connection, SqliteConnection};

use crate::ddl;
use crate::error::CatalogError;

/// What [`ensure_clean_table`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// An existing table was dropped and created again.
    Recreated,
    /// The table did not exist and was created.
    Created,
    /// The table existed and was left as is.
    Preserved,
}

/// Whether a table named `name` exists in the store.
pub async fn table_exists(conn: &mut SqliteConnection, name: &str) -> Result<bool, sqlx::Error> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")
            .bind(name)
            .fetch_one(&mut *conn)
            .await?;
    Ok(count > 0)
}

/// Apply `policy` to the table declared by `schema`.
///
/// `HardReset` drops the table and all its rows unconditionally, then
/// creates it from `schema`. `SoftEnsure` creates it only if absent.
/// Runs inside a transaction (a savepoint when the caller already holds
/// one), so a failure leaves the previous table in place.
pub async fn ensure_clean_table(
    conn: &mut SqliteConnection,
    schema: &TableSchema,
    policy: ResetPolicy,
) -> Result<ResetOutcome, CatalogError> {
    let table = schema.name();
    let reset_err = |source: sqlx::Error| CatalogError::Reset {
        table: table.to_string(),
        source,
    };

    let mut tx = conn.begin().await.map_err(reset_err)?;
    let existed = table_exists(&mut tx, table).await.map_err(reset_err)?;

    let outcome = match policy {
        ResetPolicy::HardReset => {
            tracing::debug!(table, existed, "Dropping table");
            sqlx::query(&ddl::drop_table_sql(schema))
                .execute(&mut *tx)
                .await
                .map_err(reset_err)?;
            sqlx::query(&ddl::create_table_sql(schema, false))
                .execute(&mut *tx)
                .await
                .map_err(reset_err)?;
            if existed {
                ResetOutcome::Recreated
            } else {
                ResetOutcome::Created
            }
        }
        ResetPolicy::SoftEnsure => {
            sqlx::query(&ddl::create_table_sql(schema, true))
                .execute(&mut *tx)
                .await
                .map_err(reset_err)?;
            if existed {
                tracing::warn!(table, "Table already exists, keeping existing rows");
                ResetOutcome::Preserved
            } else {
                ResetOutcome::Created
            }
        }
    };

    tx.commit().await.map_err(reset_err)?;
    tracing::debug!(table, ?outcome, %policy, "Table ready");
    Ok(outcome)
}
