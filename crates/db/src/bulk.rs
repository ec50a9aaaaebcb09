//! Bulk Loader: insert encoded rows in one unit of work.

use awj_core::{ConflictPolicy, EncodedRow, SqlValue, TableSchema};
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::{Connection, Row, Sqlite, SqliteConnection};

use crate::ddl;
use crate::error::CatalogError;

/// Per-run insert counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub inserted: u64,
    /// Rows whose key already existed under `IgnoreDuplicate`.
    pub skipped: u64,
    /// Rows that overwrote an existing key under `ReplaceOnDuplicate`.
    pub replaced: u64,
}

/// Insert `rows` into the table declared by `schema`, in input order.
///
/// All inserts share one transaction (a savepoint when the caller already
/// holds one). The first failing row aborts the batch, everything is
/// rolled back and the error names that row's key. Under `Strict` a
/// duplicate key is such a failure; the other policies absorb key
/// conflicts as documented on [`ConflictPolicy`].
pub async fn load(
    conn: &mut SqliteConnection,
    schema: &TableSchema,
    rows: &[EncodedRow],
    policy: ConflictPolicy,
) -> Result<LoadSummary, CatalogError> {
    let table = schema.name();
    let insert = ddl::insert_sql(schema, policy);
    let exists = ddl::key_exists_sql(schema);
    let key_idx = schema.primary_key_index();

    let mut tx = conn.begin().await?;
    let mut summary = LoadSummary::default();

    for row in rows {
        let load_err = |source: sqlx::Error| CatalogError::Load {
            table: table.to_string(),
            key: row.key().to_string(),
            source,
        };

        let key = &row.values[key_idx];
        let replacing = if policy == ConflictPolicy::ReplaceOnDuplicate && !key.is_null() {
            let found = bind_value(sqlx::query(&exists), key)
                .fetch_one(&mut *tx)
                .await
                .map_err(load_err)?;
            found.try_get::<i64, _>(0).map_err(load_err)? != 0
        } else {
            false
        };

        let mut query = sqlx::query(&insert);
        for value in &row.values {
            query = bind_value(query, value);
        }
        let affected = query
            .execute(&mut *tx)
            .await
            .map_err(load_err)?
            .rows_affected();

        if replacing {
            // A key-only table has nothing to update, so the upsert touches no row.
            tracing::debug!(table, key = row.key(), "Existing row replaced");
            summary.replaced += 1;
        } else if affected == 0 {
            tracing::debug!(table, key = row.key(), "Duplicate key skipped");
            summary.skipped += 1;
        } else {
            summary.inserted += 1;
        }
    }

    tx.commit().await?;
    tracing::debug!(
        table,
        %policy,
        inserted = summary.inserted,
        skipped = summary.skipped,
        replaced = summary.replaced,
        "Batch loaded"
    );
    Ok(summary)
}

/// Number of rows currently in the table declared by `schema`.
pub async fn count_rows(
    conn: &mut SqliteConnection,
    schema: &TableSchema,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(&ddl::count_rows_sql(schema))
        .fetch_one(&mut *conn)
        .await
}

fn bind_value<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: &SqlValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        SqlValue::Null => query.bind(None::<String>),
        SqlValue::Integer(n) => query.bind(*n),
        SqlValue::Real(r) => query.bind(*r),
        SqlValue::Text(s) => query.bind(s.clone()),
    }
}
