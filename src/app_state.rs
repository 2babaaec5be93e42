use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoActivityResultRepository, MongoUserRepository},
    services::{ActivityService, ScoreService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub activity_service: Arc<ActivityService>,
    pub jwt_service: JwtService,
    pub config: Arc<Config>,
    pub db: Database,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db, &config.users_collection));
        user_repository.ensure_indexes().await?;
        let user_service = Arc::new(UserService::new(user_repository));

        let activity_repository = Arc::new(MongoActivityResultRepository::new(
            &db,
            &config.activity_results_collection,
        ));
        activity_repository.ensure_indexes().await?;
        let activity_service = Arc::new(ActivityService::new(
            activity_repository,
            ScoreService::new(config.scoring),
        ));

        let jwt_service = JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
            config.refresh_expiration_hours,
        );

        Ok(Self {
            user_service,
            activity_service,
            jwt_service,
            config: Arc::new(config),
            db,
        })
    }
}
