use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Team {
    pub team_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

/// A team together with the number of users whose `team` field equals its name
#[derive(Debug, Clone, FromRow)]
pub struct TeamWithMemberCount {
    #[sqlx(flatten)]
    pub team: Team,
    pub member_count: i64,
}
