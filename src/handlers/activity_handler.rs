use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_owner_or_elevated, require_teacher_or_admin, AuthenticatedUser},
    errors::AppError,
    models::{domain::LevelConfig, dto::request::RecordActivityRequest},
    services::QuestionService,
};

#[post("/api/activities")]
pub async fn record_activity(
    state: web::Data<Arc<AppState>>,
    request: web::Json<RecordActivityRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    // Students may only record their own results; a missing student id is
    // reported by the service, not authorized away here.
    if let Some(student_id) = request.student_id.as_deref() {
        require_owner_or_elevated(&auth.0, student_id)?;
    }

    let response = state
        .activity_service
        .record_activity(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(response))
}

#[get("/api/students/{student_id}/progress")]
pub async fn get_student_progress(
    state: web::Data<Arc<AppState>>,
    student_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_owner_or_elevated(&auth.0, &student_id)?;

    let view = state.activity_service.student_progress(&student_id).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[get("/api/students/{student_id}/progress/{game_id}")]
pub async fn get_student_game_progress(
    state: web::Data<Arc<AppState>>,
    path: web::Path<(String, String)>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (student_id, game_id) = path.into_inner();
    require_owner_or_elevated(&auth.0, &student_id)?;

    let progress = state
        .activity_service
        .student_game_progress(&student_id, &game_id)
        .await?;
    Ok(HttpResponse::Ok().json(progress))
}

#[get("/api/games/{game_id}/statistics")]
pub async fn get_game_statistics(
    state: web::Data<Arc<AppState>>,
    game_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_teacher_or_admin(&auth.0)?;

    let stats = state.activity_service.game_statistics(&game_id).await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// The game client supplies the level's numeric range and step; the server
/// only owns the drawing and the answer key.
#[get("/api/questions")]
pub async fn generate_question(
    web::Query(config): web::Query<LevelConfig>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let question = QuestionService::create_question(&config)?;
    Ok(HttpResponse::Ok().json(question))
}
