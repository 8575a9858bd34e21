use sqlx::PgPool;
use storage::{
    dto::workout::CreateWorkoutRequest, error::Result, models::Workout,
    repository::workout::WorkoutRepository,
};
use uuid::Uuid;

pub async fn list_workouts(pool: &PgPool) -> Result<Vec<Workout>> {
    let repo = WorkoutRepository::new(pool);
    repo.list().await
}

pub async fn get_workout(pool: &PgPool, id: Uuid) -> Result<Workout> {
    let repo = WorkoutRepository::new(pool);
    repo.find_by_id(id).await
}

pub async fn create_workout(pool: &PgPool, request: &CreateWorkoutRequest) -> Result<Workout> {
    let repo = WorkoutRepository::new(pool);
    repo.create(request).await
}
