use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Difficulty, Exercise, Workout};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration: i32,
    pub target_calories: i32,
    pub exercises: Vec<Exercise>,
}

/// Request payload for adding a workout to the catalog
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    pub description: String,

    pub difficulty: Difficulty,

    /// Minutes
    pub duration: i32,

    pub target_calories: i32,

    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl From<Workout> for WorkoutResponse {
    fn from(workout: Workout) -> Self {
        Self {
            id: workout.workout_id,
            name: workout.name,
            description: workout.description,
            difficulty: workout.difficulty,
            duration: workout.duration,
            target_calories: workout.target_calories,
            exercises: workout.exercises.0,
        }
    }
}
