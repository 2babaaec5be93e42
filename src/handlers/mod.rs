pub mod activity_handler;
pub mod auth_handler;
pub mod user_handler;

pub use activity_handler::{
    generate_question, get_game_statistics, get_student_game_progress, get_student_progress,
    record_activity,
};
pub use auth_handler::{login, refresh_token, register};
pub use user_handler::{
    create_user, get_all_users, get_user, health_check, health_check_live, health_check_ready,
};
