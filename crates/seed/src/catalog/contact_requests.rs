//! Contact form mailbox. The loader only creates the table; rows arrive
//! later through [`awj_db::repositories::ContactRequestRepo`].

use awj_core::{Column, ConflictPolicy, CoreError, ResetPolicy, TableSchema};

use super::{CatalogLoader, Domain};

pub fn schema() -> Result<TableSchema, CoreError> {
    TableSchema::builder("contact_requests")
        .column(Column::integer("id").primary_key().auto_increment())
        .column(Column::text("name").required())
        .column(Column::text("reason").required())
        // Set when `reason` is "other".
        .column(Column::text("other_reason"))
        .column(Column::text("message"))
        .column(Column::text("phone"))
        .column(Column::text("email"))
        .build()
}

pub fn loader() -> Result<CatalogLoader, CoreError> {
    Ok(CatalogLoader {
        domain: Domain::ContactRequests,
        schema: schema()?,
        reset: ResetPolicy::SoftEnsure,
        conflict: ConflictPolicy::Strict,
    })
}
