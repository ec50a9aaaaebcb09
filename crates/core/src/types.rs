/// Auto-increment keys assigned by SQLite are 64-bit rowids.
pub type DbId = i64;
