use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Activity {
    pub activity_id: Uuid,
    pub user_email: String,
    pub activity_type: String,
    /// Minutes
    pub duration: i32,
    pub calories: i32,
    /// When the activity took place
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ActivityCalories {
    pub user_email: String,
    pub calories: i32,
}
