use sqlx::PgPool;
use storage::{
    dto::activity::{ActivityFilter, CreateActivityRequest},
    error::Result,
    models::Activity,
    repository::activity::ActivityRepository,
    services::activity::{log_activity, remove_activity},
};
use uuid::Uuid;

pub async fn list_activities(pool: &PgPool, filter: &ActivityFilter) -> Result<Vec<Activity>> {
    let repo = ActivityRepository::new(pool);
    repo.list(filter).await
}

/// Log an activity; the leaderboard is rebuilt in the same transaction
pub async fn create_activity(pool: &PgPool, request: &CreateActivityRequest) -> Result<Activity> {
    log_activity(pool, request).await
}

/// Delete an activity; the leaderboard is rebuilt in the same transaction
pub async fn delete_activity(pool: &PgPool, id: Uuid) -> Result<()> {
    remove_activity(pool, id).await
}
