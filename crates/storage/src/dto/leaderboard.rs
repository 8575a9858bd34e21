use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::LeaderboardEntry;

/// Leaderboard row with the presentation aliases the frontend reads
/// (`user`, `total_points`, `activity_count`)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardResponse {
    pub id: Uuid,
    pub user_email: String,
    pub user_name: String,
    pub user: String,
    pub team: Option<String>,
    pub total_calories: i64,
    pub total_points: i64,
    pub total_activities: i64,
    pub activity_count: i64,
    pub rank: Option<i32>,
}

/// Request payload for inserting a leaderboard row by hand
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateLeaderboardEntryRequest {
    #[validate(email)]
    #[validate(length(max = 254))]
    pub user_email: String,

    #[validate(length(min = 1, max = 100))]
    pub user_name: String,

    #[validate(length(max = 100))]
    pub team: Option<String>,

    #[serde(default)]
    pub total_calories: i64,

    #[serde(default)]
    pub total_activities: i64,

    pub rank: Option<i32>,
}

impl From<LeaderboardEntry> for LeaderboardResponse {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            id: entry.entry_id,
            user: entry.user_name.clone(),
            user_email: entry.user_email,
            user_name: entry.user_name,
            team: entry.team,
            total_calories: entry.total_calories,
            total_points: entry.total_calories,
            total_activities: entry.total_activities,
            activity_count: entry.total_activities,
            rank: entry.rank,
        }
    }
}
