use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::user::CreateUserRequest;
use crate::error::{Result, StorageError};
use crate::models::User;

pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, name, email, password, team, created_at
            FROM users
            ORDER BY name, email
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, name, email, password, team, created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }

    /// Create a new user, failing with a constraint violation if the email is taken
    pub async fn create(&self, req: &CreateUserRequest) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password, team)
            VALUES ($1, $2, $3, $4)
            RETURNING user_id, name, email, password, team, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.password)
        .bind(&req.team)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::on_unique_violation(e, "A user with this email already exists")
        })?;

        Ok(user)
    }

    /// Set or clear the team name of a user
    pub async fn assign_team(&self, id: Uuid, team: Option<&str>) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET team = $2
            WHERE user_id = $1
            RETURNING user_id, name, email, password, team, created_at
            "#,
        )
        .bind(id)
        .bind(team)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }
}
