//! The contact request mailbox survives `SoftEnsure` loader runs.

mod common;

use awj_core::{Column, ConflictPolicy, ResetPolicy, TableSchema};
use awj_db::models::contact_request::{ContactRequest, CreateContactRequest};
use awj_db::repositories::ContactRequestRepo;
use awj_db::{seed_store, SeedPlan};
use common::temp_store;

fn contact_schema() -> TableSchema {
    TableSchema::builder("contact_requests")
        .column(Column::integer("id").primary_key().auto_increment())
        .column(Column::text("name").required())
        .column(Column::text("reason").required())
        .column(Column::text("other_reason"))
        .column(Column::text("message"))
        .column(Column::text("phone"))
        .column(Column::text("email"))
        .build()
        .unwrap()
}

fn submission(name: &str) -> CreateContactRequest {
    CreateContactRequest {
        name: name.to_string(),
        reason: "سبب آخر".to_string(),
        other_reason: Some("استفسار".to_string()),
        message: None,
        phone: Some("+966500000000".to_string()),
        email: None,
    }
}

#[tokio::test]
async fn appended_requests_survive_loader_rerun() {
    let db = temp_store();
    let schema = contact_schema();
    let plan = SeedPlan {
        schema: &schema,
        reset: ResetPolicy::SoftEnsure,
        conflict: ConflictPolicy::Strict,
        records: &[],
    };

    seed_store(&db.url, &plan).await.unwrap();

    let mut store = db.open().await;
    let first = ContactRequestRepo::append(store.connection(), &submission("سارة"))
        .await
        .unwrap();
    let second = ContactRequestRepo::append(store.connection(), &submission("محمد"))
        .await
        .unwrap();
    assert!(second > first);
    store.close().await.unwrap();

    let report = seed_store(&db.url, &plan).await.unwrap();
    assert_eq!(report.row_count, 2);

    let mut store = db.open().await;
    let rows: Vec<ContactRequest> = sqlx::query_as("SELECT * FROM contact_requests ORDER BY id")
        .fetch_all(store.connection())
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, first);
    assert_eq!(rows[0].name, "سارة");
    assert_eq!(rows[0].other_reason.as_deref(), Some("استفسار"));
    assert_eq!(rows[0].message, None);
}

#[tokio::test]
async fn name_and_reason_are_required() {
    let db = temp_store();
    let schema = contact_schema();
    seed_store(
        &db.url,
        &SeedPlan {
            schema: &schema,
            reset: ResetPolicy::SoftEnsure,
            conflict: ConflictPolicy::Strict,
            records: &[],
        },
    )
    .await
    .unwrap();

    let mut store = db.open().await;
    let result = sqlx::query("INSERT INTO contact_requests (name) VALUES ('x')")
        .execute(store.connection())
        .await;
    assert!(result.is_err());
}
