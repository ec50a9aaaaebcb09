//! Construction projects shown in the portfolio.

use awj_core::{Column, ConflictPolicy, CoreError, ResetPolicy, TableSchema};

use super::{CatalogLoader, Domain};

pub fn schema() -> Result<TableSchema, CoreError> {
    TableSchema::builder("projects")
        .column(Column::text("id").primary_key())
        .column(Column::text("title").required())
        .column(Column::text("description"))
        .column(Column::text("category"))
        // completed, in-progress, ...
        .column(Column::text("status"))
        // Percent, 0-100.
        .column(Column::integer("completion"))
        .column(Column::text("value"))
        .column(Column::text("duration"))
        .column(Column::text("location"))
        .column(Column::text("client"))
        .column(Column::text("image"))
        .column(Column::text("startDate"))
        .column(Column::text("endDate"))
        .build()
}

pub fn loader() -> Result<CatalogLoader, CoreError> {
    Ok(CatalogLoader {
        domain: Domain::Projects,
        schema: schema()?,
        reset: ResetPolicy::HardReset,
        conflict: ConflictPolicy::Strict,
    })
}
