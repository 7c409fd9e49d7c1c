use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user. `external_id` is the identity forwarded by the
/// authentication gateway; everything owner-scoped keys off `id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub external_id: String,
    pub email: String,
    pub name: Option<String>,
    pub industry: Option<String>,
    pub experience: Option<i32>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile fields a user can change after onboarding. `industry` is the
/// key into the shared industry insight table.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdate {
    pub industry: String,
    pub experience: Option<i32>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
}
