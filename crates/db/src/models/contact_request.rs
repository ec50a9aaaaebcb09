//! Contact request model and DTO.

use awj_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contact_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactRequest {
    pub id: DbId,
    pub name: String,
    pub reason: String,
    /// Filled when `reason` is "other".
    pub other_reason: Option<String>,
    pub message: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// DTO for a submitted contact form.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactRequest {
    pub name: String,
    pub reason: String,
    pub other_reason: Option<String>,
    pub message: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
