#![allow(dead_code)]

use awj_core::{Column, Record, TableSchema};
use awj_db::Store;
use tempfile::TempDir;

/// A throwaway SQLite file that lives as long as the returned value.
pub struct TestStore {
    _dir: TempDir,
    pub url: String,
}

impl TestStore {
    pub async fn open(&self) -> Store {
        Store::open(&self.url).await.expect("open test store")
    }
}

pub fn temp_store() -> TestStore {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = format!("sqlite://{}", dir.path().join("catalog.db").display());
    TestStore { _dir: dir, url }
}

pub fn packages_schema() -> TableSchema {
    TableSchema::builder("packages")
        .column(Column::integer("id").primary_key())
        .column(Column::text("title"))
        .column(Column::real("price"))
        .column(Column::list("features"))
        .column(Column::boolean("is_active"))
        .column(Column::integer("display_order"))
        .build()
        .expect("valid schema")
}

pub fn records(value: serde_json::Value) -> Vec<Record> {
    serde_json::from_value(value).expect("array of objects")
}

/// `(id, title)` pairs in rowid order.
pub async fn titles(store: &mut Store) -> Vec<(i64, Option<String>)> {
    sqlx::query_as("SELECT id, title FROM packages ORDER BY rowid")
        .fetch_all(store.connection())
        .await
        .expect("select titles")
}
