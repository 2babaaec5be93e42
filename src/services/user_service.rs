use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{User, UserRole},
        dto::{
            request::{LoginRequest, RegisterRequest},
            response::{UserDto, UserListResponse},
        },
    },
    repositories::UserRepository,
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Create an account. Only elevated callers (admins) may pick a role;
    /// self-registration always yields a student.
    pub async fn register(&self, mut request: RegisterRequest, elevated: bool) -> AppResult<User> {
        request.validate()?;

        if !elevated {
            request.role = Some(UserRole::Student);
        }

        if self
            .repository
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(format!(
                "User with username '{}' already exists",
                request.username
            )));
        }

        let user = User::from_request(request);
        let created = self.repository.create(user).await?;
        log::info!("Registered user {}", created.username);
        Ok(created)
    }

    /// Verify credentials. Unknown user and wrong password produce the
    /// same error so login probing cannot enumerate usernames.
    pub async fn login(&self, request: LoginRequest) -> AppResult<User> {
        request.validate()?;

        let user = self
            .repository
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

        if !user.verify_password(&request.password) {
            return Err(AppError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        Ok(user)
    }

    /// Full domain user, for re-issuing tokens after a refresh.
    pub async fn get_user_for_token(&self, username: &str) -> AppResult<User> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", username)))
    }

    pub async fn get_user(&self, username: &str) -> AppResult<UserDto> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", username)))?;
        Ok(user.into())
    }

    pub async fn list_users(&self, offset: i64, limit: i64) -> AppResult<UserListResponse> {
        let (users, total) = self.repository.list_users(offset, limit).await?;
        Ok(UserListResponse {
            users: users.into_iter().map(UserDto::from).collect(),
            total,
        })
    }
}
