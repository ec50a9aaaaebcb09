//! Table schema declarations.
//!
//! A [`TableSchema`] is an ordered list of [`Column`]s with exactly one
//! primary key. Column order is significant: it is the order in which the
//! encoder emits values and the loader binds them.

use crate::error::CoreError;

/// Semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Integer,
    Real,
    /// Stored as INTEGER holding 0 or 1.
    Boolean,
    /// Ordered list of strings, stored as a JSON array in a TEXT column.
    List,
}

impl ColumnType {
    /// SQLite storage type used in the `CREATE TABLE` statement.
    pub fn sql_type(self) -> &'static str {
        match self {
            ColumnType::Text | ColumnType::List => "TEXT",
            ColumnType::Integer | ColumnType::Boolean => "INTEGER",
            ColumnType::Real => "REAL",
        }
    }
}

/// A single column declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
    pub primary_key: bool,
    pub auto_increment: bool,
    /// Emits `NOT NULL`. Primary keys are implicitly required.
    pub required: bool,
}

impl Column {
    pub fn new(name: &str, column_type: ColumnType) -> Self {
        Self {
            name: name.to_string(),
            column_type,
            primary_key: false,
            auto_increment: false,
            required: false,
        }
    }

    pub fn text(name: &str) -> Self {
        Self::new(name, ColumnType::Text)
    }

    pub fn integer(name: &str) -> Self {
        Self::new(name, ColumnType::Integer)
    }

    pub fn real(name: &str) -> Self {
        Self::new(name, ColumnType::Real)
    }

    pub fn boolean(name: &str) -> Self {
        Self::new(name, ColumnType::Boolean)
    }

    pub fn list(name: &str) -> Self {
        Self::new(name, ColumnType::List)
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Let the store assign the key (`INTEGER PRIMARY KEY AUTOINCREMENT`).
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Whether a record may omit this column.
    pub fn is_nullable(&self) -> bool {
        if self.primary_key {
            self.auto_increment
        } else {
            !self.required
        }
    }
}

/// A validated table declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    name: String,
    columns: Vec<Column>,
    primary_key: usize,
}

impl TableSchema {
    pub fn builder(name: &str) -> TableSchemaBuilder {
        TableSchemaBuilder {
            name: name.to_string(),
            columns: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn primary_key(&self) -> &Column {
        &self.columns[self.primary_key]
    }

    /// Index of the primary key within [`columns`](Self::columns).
    pub fn primary_key_index(&self) -> usize {
        self.primary_key
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Accumulates columns for a [`TableSchema`]; validation happens in
/// [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct TableSchemaBuilder {
    name: String,
    columns: Vec<Column>,
}

impl TableSchemaBuilder {
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn build(self) -> Result<TableSchema, CoreError> {
        let table = self.name.as_str();
        check_identifier(table, table, "table name")?;

        if self.columns.is_empty() {
            return Err(CoreError::schema(table, "no columns declared"));
        }

        let mut primary_key = None;
        for (idx, column) in self.columns.iter().enumerate() {
            check_identifier(table, &column.name, "column name")?;

            if self.columns[..idx].iter().any(|c| c.name == column.name) {
                return Err(CoreError::schema(
                    table,
                    format!("duplicate column '{}'", column.name),
                ));
            }

            if column.primary_key {
                if primary_key.is_some() {
                    return Err(CoreError::schema(table, "more than one primary key"));
                }
                primary_key = Some(idx);
            }

            if column.auto_increment
                && !(column.primary_key && column.column_type == ColumnType::Integer)
            {
                return Err(CoreError::schema(
                    table,
                    format!(
                        "column '{}': auto-increment requires an INTEGER primary key",
                        column.name
                    ),
                ));
            }
        }

        let primary_key =
            primary_key.ok_or_else(|| CoreError::schema(table, "no primary key declared"))?;

        Ok(TableSchema {
            name: self.name,
            columns: self.columns,
            primary_key,
        })
    }
}

/// Identifiers are interpolated into DDL, so only `[A-Za-z_][A-Za-z0-9_]*`
/// is accepted.
fn check_identifier(table: &str, ident: &str, what: &str) -> Result<(), CoreError> {
    let mut chars = ident.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(CoreError::schema(table, format!("invalid {what} '{ident}'")))
    }
}
