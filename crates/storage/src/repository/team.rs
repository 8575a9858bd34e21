use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::team::{CreateTeamRequest, UpdateTeamRequest};
use crate::error::{Result, StorageError};
use crate::models::{Team, TeamWithMemberCount};

const DUPLICATE_NAME: &str = "A team with this name already exists";

pub struct TeamRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TeamRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all teams with their current member counts
    pub async fn list(&self) -> Result<Vec<TeamWithMemberCount>> {
        let teams = sqlx::query_as::<_, TeamWithMemberCount>(
            r#"
            SELECT t.team_id, t.name, t.description, t.created_at,
                   (SELECT COUNT(*) FROM users u WHERE u.team = t.name) AS member_count
            FROM teams t
            ORDER BY t.name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<TeamWithMemberCount> {
        let team = sqlx::query_as::<_, TeamWithMemberCount>(
            r#"
            SELECT t.team_id, t.name, t.description, t.created_at,
                   (SELECT COUNT(*) FROM users u WHERE u.team = t.name) AS member_count
            FROM teams t
            WHERE t.team_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    /// Number of users whose team field is exactly `name`
    pub async fn member_count(&self, name: &str) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE team = $1")
            .bind(name)
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    pub async fn create(&self, req: &CreateTeamRequest) -> Result<TeamWithMemberCount> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (name, description)
            VALUES ($1, $2)
            RETURNING team_id, name, description, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::on_unique_violation(e, DUPLICATE_NAME))?;

        let member_count = self.member_count(&team.name).await?;

        Ok(TeamWithMemberCount { team, member_count })
    }

    /// Update name and/or description. Users keep whatever team name they had.
    pub async fn update(&self, id: Uuid, req: &UpdateTeamRequest) -> Result<TeamWithMemberCount> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET name = COALESCE($2, name),
                description = COALESCE($3, description)
            WHERE team_id = $1
            RETURNING team_id, name, description, created_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.description)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::on_unique_violation(e, DUPLICATE_NAME))?
        .ok_or(StorageError::NotFound)?;

        let member_count = self.member_count(&team.name).await?;

        Ok(TeamWithMemberCount { team, member_count })
    }
}
