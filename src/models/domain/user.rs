use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::hash_password;
use crate::models::dto::request::RegisterRequest;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Teacher,
    Admin,
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Student
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
    pub password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(
        username: &str,
        email: &str,
        display_name: &str,
        role: UserRole,
        password: &str,
    ) -> Self {
        User {
            username: username.to_string(),
            email: email.to_string(),
            display_name: display_name.to_string(),
            role,
            password_hash: hash_password(password),
            created_at: Some(Utc::now()),
        }
    }

    pub fn from_request(request: RegisterRequest) -> Self {
        let role = request.role.unwrap_or_default();
        User::new(
            &request.username,
            &request.email,
            &request.display_name,
            role,
            &request.password,
        )
    }

    pub fn verify_password(&self, password: &str) -> bool {
        self.password_hash == hash_password(password)
    }
}

#[cfg(test)]
impl User {
    pub fn test_student(username: &str) -> Self {
        User::new(
            username,
            &format!("{}@example.com", username),
            "Test Student",
            UserRole::Student,
            "password123",
        )
    }

    pub fn test_teacher(username: &str) -> Self {
        User::new(
            username,
            &format!("{}@example.com", username),
            "Test Teacher",
            UserRole::Teacher,
            "password123",
        )
    }
}
