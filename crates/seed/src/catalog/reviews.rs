//! Client testimonials.
//!
//! `achievements` and `skills` are free text here, not lists: reviews
//! store them as the comma-separated sentences the site displays.

use awj_core::{Column, ConflictPolicy, CoreError, ResetPolicy, TableSchema};

use super::{CatalogLoader, Domain};

pub fn schema() -> Result<TableSchema, CoreError> {
    TableSchema::builder("reviews")
        .column(Column::text("id").primary_key())
        .column(Column::text("name"))
        .column(Column::text("position"))
        .column(Column::text("department"))
        .column(Column::text("bio"))
        .column(Column::text("email"))
        .column(Column::text("phone"))
        .column(Column::text("linkedin"))
        .column(Column::text("image"))
        .column(Column::text("experience"))
        .column(Column::text("specialty"))
        .column(Column::text("achievements"))
        .column(Column::text("skills"))
        .column(Column::boolean("isActive"))
        .column(Column::integer("ordering"))
        .column(Column::text("joinDate"))
        .build()
}

/// Reviews edited through the admin screens survive a re-run; seed rows
/// only fill in ids that are missing.
pub fn loader() -> Result<CatalogLoader, CoreError> {
    Ok(CatalogLoader {
        domain: Domain::Reviews,
        schema: schema()?,
        reset: ResetPolicy::SoftEnsure,
        conflict: ConflictPolicy::IgnoreDuplicate,
    })
}
