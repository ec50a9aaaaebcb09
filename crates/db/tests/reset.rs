//! Reset Policy against a real SQLite file.

mod common;

use awj_core::ResetPolicy;
use awj_db::{count_rows, ensure_clean_table, table_exists, ResetOutcome};
use common::{packages_schema, temp_store};

async fn insert_one(store: &mut awj_db::Store) {
    sqlx::query("INSERT INTO packages (id, title) VALUES (1, 'old')")
        .execute(store.connection())
        .await
        .unwrap();
}

#[tokio::test]
async fn hard_reset_creates_missing_table() {
    let db = temp_store();
    let mut store = db.open().await;
    let schema = packages_schema();

    let outcome = ensure_clean_table(store.connection(), &schema, ResetPolicy::HardReset)
        .await
        .unwrap();

    assert_eq!(outcome, ResetOutcome::Created);
    assert!(table_exists(store.connection(), "packages").await.unwrap());
}

#[tokio::test]
async fn hard_reset_drops_existing_rows() {
    let db = temp_store();
    let mut store = db.open().await;
    let schema = packages_schema();

    ensure_clean_table(store.connection(), &schema, ResetPolicy::HardReset)
        .await
        .unwrap();
    insert_one(&mut store).await;

    let outcome = ensure_clean_table(store.connection(), &schema, ResetPolicy::HardReset)
        .await
        .unwrap();

    assert_eq!(outcome, ResetOutcome::Recreated);
    assert_eq!(count_rows(store.connection(), &schema).await.unwrap(), 0);
}

#[tokio::test]
async fn soft_ensure_keeps_existing_rows() {
    let db = temp_store();
    let mut store = db.open().await;
    let schema = packages_schema();

    let first = ensure_clean_table(store.connection(), &schema, ResetPolicy::SoftEnsure)
        .await
        .unwrap();
    assert_eq!(first, ResetOutcome::Created);
    insert_one(&mut store).await;

    let second = ensure_clean_table(store.connection(), &schema, ResetPolicy::SoftEnsure)
        .await
        .unwrap();

    assert_eq!(second, ResetOutcome::Preserved);
    assert_eq!(count_rows(store.connection(), &schema).await.unwrap(), 1);
}

#[tokio::test]
async fn hard_reset_replaces_a_foreign_table_shape() {
    let db = temp_store();
    let mut store = db.open().await;
    sqlx::query("CREATE TABLE packages (legacy TEXT)")
        .execute(store.connection())
        .await
        .unwrap();

    let schema = packages_schema();
    ensure_clean_table(store.connection(), &schema, ResetPolicy::HardReset)
        .await
        .unwrap();

    let columns: Vec<(String,)> = sqlx::query_as("SELECT name FROM pragma_table_info('packages')")
        .fetch_all(store.connection())
        .await
        .unwrap();
    let names: Vec<&str> = columns.iter().map(|(n,)| n.as_str()).collect();
    assert_eq!(
        names,
        vec!["id", "title", "price", "features", "is_active", "display_order"]
    );
}
