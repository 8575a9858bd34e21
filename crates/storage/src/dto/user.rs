use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User as returned by the API; the password is write-only
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub team: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Request payload for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[validate(email(message = "Email must be a valid address"))]
    #[validate(length(max = 254))]
    pub email: String,

    #[validate(length(min = 1, max = 255))]
    pub password: String,

    #[validate(length(max = 100))]
    pub team: Option<String>,
}

/// Request payload for moving a user to another team, `null` leaves all teams
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AssignTeamRequest {
    #[validate(length(max = 100))]
    pub team: Option<String>,
}

impl From<crate::models::User> for UserResponse {
    fn from(user: crate::models::User) -> Self {
        Self {
            id: user.user_id,
            name: user.name,
            email: user.email,
            team: user.team,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: "Test User".to_string(),
            email: email.to_string(),
            password: "testpass123".to_string(),
            team: Some("Team A".to_string()),
        }
    }

    #[test]
    fn test_valid_user_request() {
        assert!(request("test@example.com").validate().is_ok());
    }

    #[test]
    fn test_email_must_look_like_an_address() {
        let errors = request("not-an-email").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_response_never_carries_password() {
        let response = UserResponse {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            team: None,
            created_at: chrono::Utc::now().naive_utc(),
        };
        let value = serde_json::to_value(response).unwrap();
        assert!(value.get("password").is_none());
    }
}
