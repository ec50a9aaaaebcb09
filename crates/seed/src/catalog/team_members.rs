//! Team members shown on the about page.

use awj_core::{Column, ConflictPolicy, CoreError, ResetPolicy, TableSchema};

use super::{CatalogLoader, Domain};

pub fn schema() -> Result<TableSchema, CoreError> {
    TableSchema::builder("team_members")
        .column(Column::text("id").primary_key())
        .column(Column::text("name").required())
        .column(Column::text("position"))
        .column(Column::text("department"))
        .column(Column::text("bio"))
        .column(Column::text("email"))
        .column(Column::text("phone"))
        .column(Column::text("linkedin"))
        .column(Column::text("image"))
        .column(Column::text("experience"))
        .column(Column::text("specialty"))
        .column(Column::list("achievements"))
        .column(Column::list("skills"))
        .column(Column::boolean("isActive"))
        .column(Column::integer("order"))
        // Empty string means "unknown", NULL means "not provided".
        .column(Column::text("joinDate"))
        .build()
}

/// Rows added outside the seed set are kept; seeded ids are refreshed
/// with the fixture values on every run.
pub fn loader() -> Result<CatalogLoader, CoreError> {
    Ok(CatalogLoader {
        domain: Domain::TeamMembers,
        schema: schema()?,
        reset: ResetPolicy::SoftEnsure,
        conflict: ConflictPolicy::ReplaceOnDuplicate,
    })
}
