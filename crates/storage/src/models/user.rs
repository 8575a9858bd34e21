use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    /// Stored exactly as submitted, never returned by the API
    pub password: String,
    /// Name of a team, not a reference to `teams`
    pub team: Option<String>,
    pub created_at: NaiveDateTime,
}

/// The user fields a leaderboard row is built from
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserSnapshot {
    pub email: String,
    pub name: String,
    pub team: Option<String>,
}
