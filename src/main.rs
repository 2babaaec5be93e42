use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use abaco_server::{app_state::AppState, auth::AuthMiddleware, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = Arc::new(AppState::new(config).await.unwrap_or_else(|e| {
        panic!("Failed to initialize application state: {}", e);
    }));

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(Arc::clone(&state)))
            .app_data(web::Data::new(state.jwt_service.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::health_check)
            .service(handlers::health_check_ready)
            .service(handlers::health_check_live)
            .service(handlers::register)
            .service(handlers::login)
            .service(handlers::refresh_token)
            .service(
                web::scope("")
                    .wrap(AuthMiddleware)
                    .service(handlers::create_user)
                    .service(handlers::get_user)
                    .service(handlers::get_all_users)
                    .service(handlers::record_activity)
                    .service(handlers::get_student_progress)
                    .service(handlers::get_student_game_progress)
                    .service(handlers::get_game_statistics)
                    .service(handlers::generate_question),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
