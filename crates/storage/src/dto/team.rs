use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::TeamWithMemberCount;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    /// Users whose team field equals `name`, computed on every read
    pub member_count: i64,
}

/// Request payload for creating a new team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeamRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    pub description: Option<String>,
}

/// Request payload for updating a team. Renaming does not touch its members.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTeamRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    pub description: Option<String>,
}

impl From<TeamWithMemberCount> for TeamResponse {
    fn from(row: TeamWithMemberCount) -> Self {
        Self {
            id: row.team.team_id,
            name: row.team.name,
            description: row.team.description,
            created_at: row.team.created_at,
            member_count: row.member_count,
        }
    }
}
