//! Repository for the `contact_requests` mailbox.
//!
//! The table itself is created by the contact requests loader; rows are
//! only ever appended here and never rewritten by a loader run.

use awj_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::contact_request::CreateContactRequest;

pub struct ContactRequestRepo;

impl ContactRequestRepo {
    /// Append a submitted form and return its assigned id.
    pub async fn append(
        conn: &mut SqliteConnection,
        input: &CreateContactRequest,
    ) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO contact_requests \
                (name, reason, other_reason, message, phone, email) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&input.name)
        .bind(&input.reason)
        .bind(&input.other_reason)
        .bind(&input.message)
        .bind(&input.phone)
        .bind(&input.email)
        .execute(conn)
        .await?;

        Ok(result.last_insert_rowid())
    }
}
