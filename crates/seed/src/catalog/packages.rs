//! Pricing packages.
//!
//! Two variants share one column layout: `packages` (sales packages with
//! prices) and `packages_server` (service/marketing offerings without a
//! price, carrying a ready-made icon snippet for the front end).

use awj_core::{Column, ConflictPolicy, CoreError, ResetPolicy, TableSchema};

use super::{CatalogLoader, Domain};

fn builder(table: &str) -> awj_core::schema::TableSchemaBuilder {
    TableSchema::builder(table)
        .column(Column::integer("id").primary_key())
        .column(Column::text("title"))
        .column(Column::text("description"))
        .column(Column::real("price"))
        .column(Column::text("delivery_time"))
        .column(Column::list("features"))
        .column(Column::text("category"))
        .column(Column::boolean("is_active"))
        .column(Column::integer("display_order"))
}

pub fn schema() -> Result<TableSchema, CoreError> {
    builder("packages").build()
}

pub fn server_schema() -> Result<TableSchema, CoreError> {
    builder("packages_server")
        .column(Column::text("icon_html"))
        .build()
}

pub fn loader() -> Result<CatalogLoader, CoreError> {
    Ok(CatalogLoader {
        domain: Domain::Packages,
        schema: schema()?,
        reset: ResetPolicy::HardReset,
        conflict: ConflictPolicy::Strict,
    })
}

pub fn server_loader() -> Result<CatalogLoader, CoreError> {
    Ok(CatalogLoader {
        domain: Domain::PackagesServer,
        schema: server_schema()?,
        reset: ResetPolicy::HardReset,
        conflict: ConflictPolicy::Strict,
    })
}
