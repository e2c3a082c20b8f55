use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A stored user record.
///
/// Users are identified by email; the record is immutable after signup.
/// The password hash stays internal and is never serialized into a response.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
