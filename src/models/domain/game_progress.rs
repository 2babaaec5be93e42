use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::ActivityResult;

/// Per-student view of one game, recomputed from the record store on every
/// query. Never persisted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameProgress {
    pub game_id: String,
    pub total_points: i64,
    /// Percentage of recorded activities marked completed, in [0, 100].
    pub completion_rate: f64,
    /// Mean accuracy over records that reported both answer counters;
    /// 0 when none did.
    pub average_accuracy: f64,
    pub max_unlocked_level: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,
    /// Matching records, most recent first.
    pub statistics: Vec<ActivityResult>,
}

impl GameProgress {
    pub fn empty(game_id: &str) -> Self {
        GameProgress {
            game_id: game_id.to_string(),
            total_points: 0,
            completion_rate: 0.0,
            average_accuracy: 0.0,
            max_unlocked_level: 0,
            last_activity: None,
            statistics: Vec::new(),
        }
    }
}

/// All of one student's games, plus cross-game totals.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StudentProgressView {
    pub student_id: String,
    pub game_progress: Vec<GameProgress>,
    pub total_points: i64,
    pub total_games_played: usize,
}

/// Cross-student summary of a single game, for teacher dashboards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameStatisticsView {
    pub game_id: String,
    pub total_students: usize,
    pub student_progress: Vec<StudentGameSummary>,
    pub average_points: f64,
    pub average_accuracy: f64,
    pub completion_rate: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StudentGameSummary {
    pub student_id: String,
    pub progress: GameProgress,
}
