//! Service offerings, grouped by `category`.

use awj_core::{Column, ConflictPolicy, CoreError, ResetPolicy, TableSchema};

use super::{CatalogLoader, Domain};

pub fn schema() -> Result<TableSchema, CoreError> {
    TableSchema::builder("services")
        .column(Column::integer("id").primary_key())
        .column(Column::text("title"))
        .column(Column::text("description"))
        .column(Column::text("short_description"))
        .column(Column::text("icon"))
        .column(Column::text("image"))
        .column(Column::list("features"))
        .column(Column::list("benefits"))
        .column(Column::text("category"))
        .column(Column::boolean("is_active"))
        .column(Column::integer("display_order"))
        .build()
}

pub fn loader() -> Result<CatalogLoader, CoreError> {
    Ok(CatalogLoader {
        domain: Domain::Services,
        schema: schema()?,
        reset: ResetPolicy::HardReset,
        conflict: ConflictPolicy::Strict,
    })
}
