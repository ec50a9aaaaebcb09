//! Connection Lifecycle.
//!
//! A [`Store`] owns exactly one SQLite connection for the duration of a
//! loader run. Writes happen inside a single transaction that is
//! committed explicitly; on any error the transaction is dropped (rolled
//! back) and the connection is released when the `Store` goes away.

use std::str::FromStr;

use awj_core::encoding::encode_all;
use awj_core::{ConflictPolicy, Record, ResetPolicy, TableSchema};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};

use crate::bulk::{count_rows, load, LoadSummary};
use crate::error::CatalogError;
use crate::reset::{ensure_clean_table, ResetOutcome};

/// Everything one loader run needs: the table, how to reset it, how to
/// resolve key conflicts, and the literal records to seed.
#[derive(Debug, Clone, Copy)]
pub struct SeedPlan<'a> {
    pub schema: &'a TableSchema,
    pub reset: ResetPolicy,
    pub conflict: ConflictPolicy,
    pub records: &'a [Record],
}

/// Outcome of a committed loader run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub table: String,
    pub reset: ResetOutcome,
    pub load: LoadSummary,
    /// Rows in the table as committed, including rows kept by `SoftEnsure`.
    pub row_count: i64,
}

/// A single open handle to the catalog store.
#[derive(Debug)]
pub struct Store {
    conn: SqliteConnection,
}

impl Store {
    /// Open the store at `url`, creating the file if it does not exist.
    pub async fn open(url: &str) -> Result<Self, CatalogError> {
        let conn = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .connect()
            .await?;
        tracing::debug!(url, "Catalog store opened");
        Ok(Self { conn })
    }

    /// Direct access for callers that append rows outside a loader run.
    pub fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }

    /// Run one loader: encode, reset, load, commit.
    ///
    /// Records are encoded before the transaction opens, so an encoding
    /// failure never touches the store. Reset and load share one
    /// transaction: a failed `HardReset` run leaves the previous table and
    /// its rows exactly as they were.
    pub async fn seed(&mut self, plan: &SeedPlan<'_>) -> Result<SeedReport, CatalogError> {
        let table = plan.schema.name();
        let rows = encode_all(plan.schema, plan.records)?;

        let mut tx = self.conn.begin().await?;
        let reset = ensure_clean_table(&mut tx, plan.schema, plan.reset).await?;
        let summary = load(&mut tx, plan.schema, &rows, plan.conflict).await?;
        let row_count = count_rows(&mut tx, plan.schema).await?;
        tx.commit().await?;

        tracing::info!(
            table,
            reset_policy = %plan.reset,
            conflict_policy = %plan.conflict,
            inserted = summary.inserted,
            skipped = summary.skipped,
            replaced = summary.replaced,
            row_count,
            "Loader run committed"
        );

        Ok(SeedReport {
            table: table.to_string(),
            reset,
            load: summary,
            row_count,
        })
    }

    /// Close the connection, flushing it cleanly.
    pub async fn close(self) -> Result<(), CatalogError> {
        self.conn.close().await?;
        Ok(())
    }
}

/// Open the store at `url`, run `plan`, and release the handle on every
/// exit path.
pub async fn seed_store(url: &str, plan: &SeedPlan<'_>) -> Result<SeedReport, CatalogError> {
    let mut store = Store::open(url).await?;
    match store.seed(plan).await {
        Ok(report) => {
            store.close().await?;
            Ok(report)
        }
        Err(err) => {
            if let Err(close_err) = store.close().await {
                tracing::warn!(error = %close_err, "Failed to close store after failed run");
            }
            Err(err)
        }
    }
}
