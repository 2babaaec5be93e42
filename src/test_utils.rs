use crate::models::domain::ActivityResult;

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use chrono::{Duration, Utc};

    /// Completed activity record with an explicit age, so
    /// ordering-sensitive tests get distinct timestamps
    pub fn activity(
        student_id: &str,
        game_id: &str,
        points: i64,
        minutes_ago: i64,
    ) -> ActivityResult {
        let mut record = ActivityResult::test_record(student_id, game_id, points);
        record.created_at = Utc::now() - Duration::minutes(minutes_ago);
        record
    }

    /// Variant with the completion flag and unlock level set, for
    /// aggregation tests
    pub fn activity_with_progress(
        student_id: &str,
        game_id: &str,
        points: i64,
        is_completed: bool,
        max_unlocked_level: u32,
        minutes_ago: i64,
    ) -> ActivityResult {
        let mut record = activity(student_id, game_id, points, minutes_ago);
        record.is_completed = is_completed;
        record.max_unlocked_level = max_unlocked_level;
        record
    }

    /// A small mixed record set spanning two students and two games
    pub fn sample_records() -> Vec<ActivityResult> {
        vec![
            activity("s1", "counting", 100, 30),
            activity("s1", "counting", 50, 20),
            activity("s1", "sequences", 80, 10),
            activity("s2", "counting", 60, 5),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_activity_fixture_ages_records() {
        let older = activity("s1", "counting", 100, 30);
        let newer = activity("s1", "counting", 50, 20);
        assert!(older.created_at < newer.created_at);
    }

    #[test]
    fn test_sample_records_span_students_and_games() {
        let records = sample_records();
        assert_eq!(records.len(), 4);
        assert!(records.iter().any(|r| r.student_id == "s2"));
        assert!(records.iter().any(|r| r.game_id == "sequences"));
    }
}
