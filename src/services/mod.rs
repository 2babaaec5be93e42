pub mod activity_service;
pub mod progress_service;
pub mod question_service;
pub mod score_service;
pub mod statistics_service;
pub mod user_service;

pub use activity_service::ActivityService;
pub use progress_service::ProgressTracker;
pub use question_service::QuestionService;
pub use score_service::ScoreService;
pub use statistics_service::StatisticsService;
pub use user_service::UserService;
