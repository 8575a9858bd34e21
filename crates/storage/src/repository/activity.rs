use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::dto::activity::{ActivityFilter, CreateActivityRequest};
use crate::error::{Result, StorageError};
use crate::models::Activity;

pub struct ActivityRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ActivityRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List activities, most recent first
    pub async fn list(&self, filter: &ActivityFilter) -> Result<Vec<Activity>> {
        let activities = sqlx::query_as::<_, Activity>(
            r#"
            SELECT activity_id, user_email, activity_type, duration, calories, date, created_at
            FROM activities
            WHERE ($1::varchar IS NULL OR user_email = $1)
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(&filter.user_email)
        .fetch_all(self.pool)
        .await?;

        Ok(activities)
    }

    pub async fn create(&self, req: &CreateActivityRequest) -> Result<Activity> {
        let mut tx = self.pool.begin().await?;
        let activity = insert(&mut tx, req).await?;
        tx.commit().await?;

        Ok(activity)
    }
}

pub async fn insert(
    tx: &mut Transaction<'_, Postgres>,
    req: &CreateActivityRequest,
) -> Result<Activity> {
    let activity = sqlx::query_as::<_, Activity>(
        r#"
        INSERT INTO activities (user_email, activity_type, duration, calories, date)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING activity_id, user_email, activity_type, duration, calories, date, created_at
        "#,
    )
    .bind(&req.user_email)
    .bind(&req.activity_type)
    .bind(req.duration)
    .bind(req.calories)
    .bind(req.date)
    .fetch_one(&mut **tx)
    .await?;

    Ok(activity)
}

pub async fn delete(tx: &mut Transaction<'_, Postgres>, id: Uuid) -> Result<()> {
    let result = sqlx::query("DELETE FROM activities WHERE activity_id = $1")
        .bind(id)
        .execute(&mut **tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::NotFound);
    }

    Ok(())
}
