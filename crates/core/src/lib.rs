//! Catalog bootstrap core.
//!
//! Pure logic shared by every catalog loader, with no database
//! dependencies:
//!
//! - [`schema`]: table and column declarations.
//! - [`record`]: in-memory records and the flat values they encode to.
//! - [`encoding`]: the Record Encoder plus decoders for list and boolean
//!   columns.
//! - [`policy`]: per-table reset and conflict policies.

pub mod encoding;
pub mod error;
pub mod policy;
pub mod record;
pub mod schema;
pub mod types;

pub use error::CoreError;
pub use policy::{ConflictPolicy, ResetPolicy};
pub use record::{EncodedRow, Record, SqlValue};
pub use schema::{Column, ColumnType, TableSchema};
