use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded play session for a single activity. Append-only: a result
/// is written once when the activity finishes and never mutated. Repeated
/// plays of the same activity are independent historical records.
///
/// `level` is 0-indexed internally; clients display it 1-indexed.
/// `correct_answers` and `total_questions` are optional because older game
/// clients never reported them; "absent" must stay distinct from "zero"
/// when aggregating accuracy.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ActivityResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub student_id: String,
    pub game_id: String,
    pub level: u32,
    pub activity: u32,
    pub points: i64,
    pub attempts: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<u32>,
    /// Seconds spent on the activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<f64>,
    pub is_completed: bool,
    pub max_unlocked_level: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_end_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ActivityResult {
    /// Accuracy of this record as a percentage, when both counters were
    /// reported and at least one question was asked.
    pub fn accuracy(&self) -> Option<f64> {
        match (self.correct_answers, self.total_questions) {
            (Some(correct), Some(total)) if total > 0 => {
                Some(f64::from(correct) / f64::from(total) * 100.0)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
impl ActivityResult {
    pub fn test_record(student_id: &str, game_id: &str, points: i64) -> Self {
        ActivityResult {
            id: None,
            student_id: student_id.to_string(),
            game_id: game_id.to_string(),
            level: 0,
            activity: 0,
            points,
            attempts: 1,
            correct_answers: None,
            total_questions: None,
            completion_time: None,
            is_completed: true,
            max_unlocked_level: 1,
            session_start_time: None,
            session_end_time: None,
            created_at: Utc::now(),
        }
    }
}
