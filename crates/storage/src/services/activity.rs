use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::dto::activity::CreateActivityRequest;
use crate::error::Result;
use crate::models::Activity;
use crate::repository::activity;
use crate::services::leaderboard;

/// Log an activity and rebuild the leaderboard in one transaction.
///
/// Either both the new row and the rebuilt standings are committed or
/// neither is.
pub async fn log_activity(pool: &PgPool, req: &CreateActivityRequest) -> Result<Activity> {
    let mut tx = pool.begin().await?;
    leaderboard::lock(&mut tx).await?;

    let activity = activity::insert(&mut tx, req).await?;
    leaderboard::rebuild(&mut tx).await?;

    tx.commit().await?;
    debug!("Logged activity {} for {}", activity.activity_id, activity.user_email);

    Ok(activity)
}

/// Delete an activity and rebuild the leaderboard in one transaction
pub async fn remove_activity(pool: &PgPool, id: Uuid) -> Result<()> {
    let mut tx = pool.begin().await?;
    leaderboard::lock(&mut tx).await?;

    activity::delete(&mut tx, id).await?;
    leaderboard::rebuild(&mut tx).await?;

    tx.commit().await?;
    debug!("Removed activity {}", id);

    Ok(())
}
