use std::sync::Arc;

use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{LoginRequest, RefreshTokenRequest, RegisterRequest},
        response::{AuthResponse, RefreshTokenResponse},
    },
};

#[post("/api/auth/register")]
pub async fn register(
    state: web::Data<Arc<AppState>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    // Self-registration: role requests are ignored, everyone starts as a
    // student. Admins create teacher accounts through /api/users.
    let user = state
        .user_service
        .register(request.into_inner(), false)
        .await?;

    let token = state.jwt_service.create_token(&user)?;
    let issued_refresh_token = state.jwt_service.create_refresh_token(&user.username)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        refresh_token: issued_refresh_token,
        user: user.into(),
    }))
}

#[post("/api/auth/login")]
pub async fn login(
    state: web::Data<Arc<AppState>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.login(request.into_inner()).await?;

    let token = state.jwt_service.create_token(&user)?;
    let issued_refresh_token = state.jwt_service.create_refresh_token(&user.username)?;

    log::info!("User {} logged in", user.username);

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        refresh_token: issued_refresh_token,
        user: user.into(),
    }))
}

#[post("/api/auth/refresh")]
pub async fn refresh_token(
    state: web::Data<Arc<AppState>>,
    request: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    let refresh_claims = state
        .jwt_service
        .validate_refresh_token(&request.refresh_token)?;

    let user = state
        .user_service
        .get_user_for_token(&refresh_claims.sub)
        .await
        .map_err(|_| {
            AppError::Unauthorized("User associated with refresh token not found".to_string())
        })?;

    let new_token = state.jwt_service.create_token(&user)?;
    let new_refresh_token = state.jwt_service.create_refresh_token(&refresh_claims.sub)?;

    log::info!("Token refreshed successfully for user: {}", refresh_claims.sub);

    Ok(HttpResponse::Ok().json(RefreshTokenResponse {
        token: new_token,
        refresh_token: new_refresh_token,
    }))
}
