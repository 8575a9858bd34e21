use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActivityResponse {
    pub id: Uuid,
    pub user_email: String,
    pub activity_type: String,
    pub duration: i32,
    pub calories: i32,
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

/// Request payload for logging an activity
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateActivityRequest {
    #[validate(email)]
    #[validate(length(max = 254))]
    pub user_email: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Activity type must be between 1 and 100 characters"
    ))]
    pub activity_type: String,

    /// Minutes
    pub duration: i32,

    pub calories: i32,

    pub date: NaiveDateTime,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ActivityFilter {
    /// Only return activities logged for this email
    pub user_email: Option<String>,
}

impl From<crate::models::Activity> for ActivityResponse {
    fn from(activity: crate::models::Activity) -> Self {
        Self {
            id: activity.activity_id,
            user_email: activity.user_email,
            activity_type: activity.activity_type,
            duration: activity.duration,
            calories: activity.calories,
            date: activity.date,
            created_at: activity.created_at,
        }
    }
}
