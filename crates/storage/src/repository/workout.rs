use sqlx::{PgPool, types::Json};
use uuid::Uuid;

use crate::dto::workout::CreateWorkoutRequest;
use crate::error::{Result, StorageError};
use crate::models::Workout;

pub struct WorkoutRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(
            r#"
            SELECT workout_id, name, description, difficulty, duration, target_calories, exercises
            FROM workouts
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(workouts)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            SELECT workout_id, name, description, difficulty, duration, target_calories, exercises
            FROM workouts
            WHERE workout_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(workout)
    }

    pub async fn create(&self, req: &CreateWorkoutRequest) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            INSERT INTO workouts (name, description, difficulty, duration, target_calories, exercises)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING workout_id, name, description, difficulty, duration, target_calories, exercises
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.difficulty)
        .bind(req.duration)
        .bind(req.target_calories)
        .bind(Json(&req.exercises))
        .fetch_one(self.pool)
        .await?;

        Ok(workout)
    }
}
