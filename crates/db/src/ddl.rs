//! SQL text for catalog tables.
//!
//! Identifiers come from a validated [`TableSchema`] and are always
//! double-quoted, so reserved words such as `order` are safe column names.

use awj_core::{ColumnType, ConflictPolicy, TableSchema};

pub fn quote(ident: &str) -> String {
    format!("\"{ident}\"")
}

pub fn drop_table_sql(schema: &TableSchema) -> String {
    format!("DROP TABLE IF EXISTS {}", quote(schema.name()))
}

/// `CREATE TABLE` for the schema, one column per line.
///
/// Boolean columns carry a `CHECK` so only 0, 1 or `NULL` can be stored.
pub fn create_table_sql(schema: &TableSchema, if_not_exists: bool) -> String {
    let columns: Vec<String> = schema
        .columns()
        .iter()
        .map(|column| {
            let name = quote(&column.name);
            let mut def = format!("{name} {}", column.column_type.sql_type());
            if column.primary_key {
                def.push_str(" PRIMARY KEY");
                if column.auto_increment {
                    def.push_str(" AUTOINCREMENT");
                }
            } else if column.required {
                def.push_str(" NOT NULL");
            }
            if column.column_type == ColumnType::Boolean {
                def.push_str(&format!(" CHECK ({name} IN (0, 1))"));
            }
            def
        })
        .collect();

    format!(
        "CREATE TABLE {}{} (\n    {}\n)",
        if if_not_exists { "IF NOT EXISTS " } else { "" },
        quote(schema.name()),
        columns.join(",\n    ")
    )
}

/// Parameterised `INSERT` for every column, in schema order.
///
/// Only primary key conflicts are absorbed by the non-strict policies.
pub fn insert_sql(schema: &TableSchema, policy: ConflictPolicy) -> String {
    let names: Vec<String> = schema.columns().iter().map(|c| quote(&c.name)).collect();
    let placeholders: Vec<String> = (1..=names.len()).map(|i| format!("?{i}")).collect();

    let mut sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote(schema.name()),
        names.join(", "),
        placeholders.join(", ")
    );

    let key = quote(&schema.primary_key().name);
    let updates: Vec<String> = schema
        .columns()
        .iter()
        .filter(|c| !c.primary_key)
        .map(|c| {
            let name = quote(&c.name);
            format!("{name} = excluded.{name}")
        })
        .collect();

    match policy {
        ConflictPolicy::Strict => {}
        ConflictPolicy::ReplaceOnDuplicate if !updates.is_empty() => {
            sql.push_str(&format!(
                " ON CONFLICT({key}) DO UPDATE SET {}",
                updates.join(", ")
            ));
        }
        ConflictPolicy::IgnoreDuplicate | ConflictPolicy::ReplaceOnDuplicate => {
            sql.push_str(&format!(" ON CONFLICT({key}) DO NOTHING"));
        }
    }

    sql
}

pub fn key_exists_sql(schema: &TableSchema) -> String {
    format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ?1)",
        quote(schema.name()),
        quote(&schema.primary_key().name)
    )
}

pub fn count_rows_sql(schema: &TableSchema) -> String {
    format!("SELECT COUNT(*) FROM {}", quote(schema.name()))
}

#[cfg(test)]
mod tests {
    use awj_core::Column;

    use super::*;

    fn schema() -> TableSchema {
        TableSchema::builder("team_members")
            .column(Column::text("id").primary_key())
            .column(Column::text("name").required())
            .column(Column::list("skills"))
            .column(Column::boolean("isActive"))
            .column(Column::integer("order"))
            .build()
            .unwrap()
    }

    #[test]
    fn create_statement() {
        assert_eq!(
            create_table_sql(&schema(), false),
            "CREATE TABLE \"team_members\" (\n    \
             \"id\" TEXT PRIMARY KEY,\n    \
             \"name\" TEXT NOT NULL,\n    \
             \"skills\" TEXT,\n    \
             \"isActive\" INTEGER CHECK (\"isActive\" IN (0, 1)),\n    \
             \"order\" INTEGER\n)"
        );
    }

    #[test]
    fn create_if_not_exists() {
        assert!(create_table_sql(&schema(), true)
            .starts_with("CREATE TABLE IF NOT EXISTS \"team_members\""));
    }

    #[test]
    fn auto_increment_key() {
        let schema = TableSchema::builder("contact_requests")
            .column(Column::integer("id").primary_key().auto_increment())
            .column(Column::text("name").required())
            .build()
            .unwrap();
        assert!(create_table_sql(&schema, false)
            .contains("\"id\" INTEGER PRIMARY KEY AUTOINCREMENT"));
    }

    #[test]
    fn drop_statement() {
        assert_eq!(
            drop_table_sql(&schema()),
            "DROP TABLE IF EXISTS \"team_members\""
        );
    }

    #[test]
    fn strict_insert() {
        assert_eq!(
            insert_sql(&schema(), ConflictPolicy::Strict),
            "INSERT INTO \"team_members\" (\"id\", \"name\", \"skills\", \"isActive\", \"order\") \
             VALUES (?1, ?2, ?3, ?4, ?5)"
        );
    }

    #[test]
    fn ignore_insert() {
        assert!(insert_sql(&schema(), ConflictPolicy::IgnoreDuplicate)
            .ends_with(" ON CONFLICT(\"id\") DO NOTHING"));
    }

    #[test]
    fn replace_insert_updates_every_non_key_column() {
        let sql = insert_sql(&schema(), ConflictPolicy::ReplaceOnDuplicate);
        assert!(sql.ends_with(
            " ON CONFLICT(\"id\") DO UPDATE SET \"name\" = excluded.\"name\", \
             \"skills\" = excluded.\"skills\", \"isActive\" = excluded.\"isActive\", \
             \"order\" = excluded.\"order\""
        ));
    }

    #[test]
    fn replace_on_key_only_table_does_nothing() {
        let schema = TableSchema::builder("tags")
            .column(Column::text("id").primary_key())
            .build()
            .unwrap();
        assert!(insert_sql(&schema, ConflictPolicy::ReplaceOnDuplicate)
            .ends_with("DO NOTHING"));
    }
}
