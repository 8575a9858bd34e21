use sqlx::{PgPool, Postgres, Transaction};

use crate::dto::leaderboard::CreateLeaderboardEntryRequest;
use crate::error::{Result, StorageError};
use crate::models::{LeaderboardEntry, NewLeaderboardEntry};

const DUPLICATE_EMAIL: &str = "A leaderboard entry for this email already exists";

pub struct LeaderboardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Rows in rank order; unranked rows go last, by calories
    pub async fn list(&self) -> Result<Vec<LeaderboardEntry>> {
        let entries = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            SELECT entry_id, user_email, user_name, team, total_calories, total_activities, rank
            FROM leaderboard
            ORDER BY rank ASC NULLS LAST, total_calories DESC, user_email ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    pub async fn create(&self, req: &CreateLeaderboardEntryRequest) -> Result<LeaderboardEntry> {
        let entry = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            INSERT INTO leaderboard (user_email, user_name, team, total_calories, total_activities, rank)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING entry_id, user_email, user_name, team, total_calories, total_activities, rank
            "#,
        )
        .bind(&req.user_email)
        .bind(&req.user_name)
        .bind(&req.team)
        .bind(req.total_calories)
        .bind(req.total_activities)
        .bind(req.rank)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::on_unique_violation(e, DUPLICATE_EMAIL))?;

        Ok(entry)
    }
}

/// Discard every leaderboard row and write `entries` in their place
pub async fn replace_all(
    tx: &mut Transaction<'_, Postgres>,
    entries: &[NewLeaderboardEntry],
) -> Result<Vec<LeaderboardEntry>> {
    sqlx::query("DELETE FROM leaderboard")
        .execute(&mut **tx)
        .await?;

    let mut written = Vec::with_capacity(entries.len());

    for entry in entries {
        let row = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            INSERT INTO leaderboard (user_email, user_name, team, total_calories, total_activities, rank)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING entry_id, user_email, user_name, team, total_calories, total_activities, rank
            "#,
        )
        .bind(&entry.user_email)
        .bind(&entry.user_name)
        .bind(&entry.team)
        .bind(entry.total_calories)
        .bind(entry.total_activities)
        .bind(entry.rank)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| StorageError::on_unique_violation(e, DUPLICATE_EMAIL))?;

        written.push(row);
    }

    Ok(written)
}
