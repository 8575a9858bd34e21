use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "workout_difficulty")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of a workout, e.g. `{"name": "Push-ups", "sets": 5, "reps": 20}`
/// or `{"name": "Battle rope", "sets": 4, "duration": "30 seconds"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Exercise {
    pub name: String,
    pub sets: i32,
    #[serde(flatten)]
    pub volume: ExerciseVolume,
}

/// Exactly one of `reps` or `duration`; a payload carrying both is rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged, deny_unknown_fields)]
pub enum ExerciseVolume {
    Reps { reps: i32 },
    Timed { duration: String },
}

impl Exercise {
    pub fn reps(name: impl Into<String>, sets: i32, reps: i32) -> Self {
        Self {
            name: name.into(),
            sets,
            volume: ExerciseVolume::Reps { reps },
        }
    }

    pub fn timed(name: impl Into<String>, sets: i32, duration: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sets,
            volume: ExerciseVolume::Timed {
                duration: duration.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Workout {
    pub workout_id: Uuid,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    /// Minutes
    pub duration: i32,
    pub target_calories: i32,
    pub exercises: Json<Vec<Exercise>>,
}
