use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Materialized standing of one user, rebuilt wholesale from the activity log
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LeaderboardEntry {
    pub entry_id: Uuid,
    pub user_email: String,
    pub user_name: String,
    pub team: Option<String>,
    pub total_calories: i64,
    pub total_activities: i64,
    pub rank: Option<i32>,
}

/// A computed standing that has not been written yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLeaderboardEntry {
    pub user_email: String,
    pub user_name: String,
    pub team: Option<String>,
    pub total_calories: i64,
    pub total_activities: i64,
    pub rank: i32,
}
