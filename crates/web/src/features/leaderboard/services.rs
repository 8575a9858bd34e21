use sqlx::PgPool;
use storage::{
    dto::leaderboard::CreateLeaderboardEntryRequest,
    error::Result,
    models::LeaderboardEntry,
    repository::leaderboard::LeaderboardRepository,
    services::leaderboard,
};

pub async fn list_leaderboard(pool: &PgPool) -> Result<Vec<LeaderboardEntry>> {
    let repo = LeaderboardRepository::new(pool);
    repo.list().await
}

/// Insert a row as given; the next rebuild overwrites it
pub async fn create_entry(
    pool: &PgPool,
    request: &CreateLeaderboardEntryRequest,
) -> Result<LeaderboardEntry> {
    let repo = LeaderboardRepository::new(pool);
    repo.create(request).await
}

pub async fn recompute(pool: &PgPool) -> Result<Vec<LeaderboardEntry>> {
    leaderboard::recompute_leaderboard(pool).await
}
