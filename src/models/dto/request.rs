use serde::Deserialize;
use validator::Validate;

use crate::models::domain::user::UserRole;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 100))]
    pub display_name: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    /// Omitted for self-registration; only admins may set it.
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Raw activity submission. Required fields arrive as `Option` and numbers
/// as signed integers so the service can report "missing required fields"
/// and "invalid field values" as distinct errors instead of a generic
/// deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordActivityRequest {
    pub student_id: Option<String>,
    pub game_id: Option<String>,
    pub level: Option<i64>,
    pub activity: Option<i64>,
    pub points: Option<i64>,
    pub attempts: Option<i64>,
    pub correct_answers: Option<i64>,
    pub total_questions: Option<i64>,
    pub completion_time: Option<f64>,
    pub is_completed: Option<bool>,
    pub max_unlocked_level: Option<i64>,
    pub session_start_time: Option<chrono::DateTime<chrono::Utc>>,
    pub session_end_time: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl PaginationParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(50).clamp(1, 200)
    }
}
