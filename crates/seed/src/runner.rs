//! Runs catalog loaders against the configured store.
//!
//! Loaders sharing one store file must not run concurrently; [`run_all`]
//! therefore runs them one after another on a single task.

use awj_core::encoding::undeclared_fields;
use awj_core::record::describe_key;
use awj_db::{seed_store, CatalogError, SeedPlan, SeedReport};

use crate::catalog::Domain;
use crate::config::SeedConfig;
use crate::error::SeedError;
use crate::fixtures;

/// Run the loader for `domain`: open the store, reset, load, commit, close.
pub async fn run_loader(config: &SeedConfig, domain: Domain) -> Result<SeedReport, SeedError> {
    let loader = domain.loader().map_err(CatalogError::from)?;
    let records = fixtures::load(domain, config.fixtures_dir.as_deref())?;

    let key_field = &loader.schema.primary_key().name;
    for record in &records {
        let extra = undeclared_fields(&loader.schema, record);
        if !extra.is_empty() {
            tracing::warn!(
                table = domain.table(),
                key = %describe_key(record, key_field),
                fields = ?extra,
                "Ignoring fields not declared in the table schema"
            );
        }
    }

    tracing::debug!(
        table = domain.table(),
        records = records.len(),
        reset_policy = %loader.reset,
        conflict_policy = %loader.conflict,
        "Running loader"
    );

    let plan = SeedPlan {
        schema: &loader.schema,
        reset: loader.reset,
        conflict: loader.conflict,
        records: &records,
    };
    let report = seed_store(&config.database_url, &plan).await?;

    tracing::info!(
        "Table '{}' is ready with {} rows",
        report.table,
        report.row_count
    );
    Ok(report)
}

/// Run `domains` in order, stopping at the first failure.
pub async fn run_all(
    config: &SeedConfig,
    domains: &[Domain],
) -> Result<Vec<SeedReport>, SeedError> {
    let mut reports = Vec::with_capacity(domains.len());
    for &domain in domains {
        reports.push(run_loader(config, domain).await?);
    }
    Ok(reports)
}
