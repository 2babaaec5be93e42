pub mod activity_result;
pub mod game_progress;
pub mod level_config;
pub mod question;
pub mod user;

pub use activity_result::ActivityResult;
pub use game_progress::{GameProgress, GameStatisticsView, StudentGameSummary, StudentProgressView};
pub use level_config::LevelConfig;
pub use question::Question;
pub use user::{User, UserRole};
