use sqlx::PgPool;
use storage::{
    dto::team::{CreateTeamRequest, UpdateTeamRequest},
    error::Result,
    models::TeamWithMemberCount,
    repository::team::TeamRepository,
};
use uuid::Uuid;

/// List all teams with member counts
pub async fn list_teams(pool: &PgPool) -> Result<Vec<TeamWithMemberCount>> {
    let repo = TeamRepository::new(pool);
    repo.list().await
}

pub async fn get_team(pool: &PgPool, id: Uuid) -> Result<TeamWithMemberCount> {
    let repo = TeamRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new team
pub async fn create_team(pool: &PgPool, request: &CreateTeamRequest) -> Result<TeamWithMemberCount> {
    let repo = TeamRepository::new(pool);
    repo.create(request).await
}

/// Update a team. Users still carrying the old name are left as they are.
pub async fn update_team(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateTeamRequest,
) -> Result<TeamWithMemberCount> {
    let repo = TeamRepository::new(pool);
    repo.update(id, request).await
}
