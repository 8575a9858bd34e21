use sqlx::PgPool;
use storage::{
    dto::user::{AssignTeamRequest, CreateUserRequest},
    error::Result,
    models::User,
    repository::user::UserRepository,
};
use uuid::Uuid;

/// List all users
pub async fn list_users(pool: &PgPool) -> Result<Vec<User>> {
    let repo = UserRepository::new(pool);
    repo.list().await
}

pub async fn get_user(pool: &PgPool, id: Uuid) -> Result<User> {
    let repo = UserRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new user
pub async fn create_user(pool: &PgPool, request: &CreateUserRequest) -> Result<User> {
    let repo = UserRepository::new(pool);
    repo.create(request).await
}

/// Point a user at another team name; the leaderboard picks it up on its next rebuild
pub async fn assign_team(pool: &PgPool, id: Uuid, request: &AssignTeamRequest) -> Result<User> {
    let repo = UserRepository::new(pool);
    repo.assign_team(id, request.team.as_deref()).await
}
