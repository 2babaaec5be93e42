use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{ActivityResult, GameProgress, GameStatisticsView, StudentProgressView},
        dto::{request::RecordActivityRequest, response::RecordActivityResponse},
    },
    repositories::ActivityResultRepository,
    services::{score_service::ScoreService, statistics_service::StatisticsService},
};

/// Records played activities and serves the derived progress views.
/// Aggregation always recomputes from store contents, so a failed append
/// never corrupts any derived state.
pub struct ActivityService {
    repository: Arc<dyn ActivityResultRepository>,
    score_service: ScoreService,
}

impl ActivityService {
    pub fn new(repository: Arc<dyn ActivityResultRepository>, score_service: ScoreService) -> Self {
        Self {
            repository,
            score_service,
        }
    }

    /// Validate and append one play record. Missing required fields and
    /// out-of-domain values are rejected with distinct errors before
    /// anything touches the store.
    pub async fn record_activity(
        &self,
        request: RecordActivityRequest,
    ) -> AppResult<RecordActivityResponse> {
        let record = self.build_record(request)?;

        let level_passed = match record.total_questions {
            Some(total) if total > 0 => {
                self.score_service
                    .is_level_passed(record.points, total, record.level)?
            }
            _ => false,
        };

        let stored = self.repository.append(record).await?;
        log::info!(
            "Recorded activity for student {} in game {} ({} points)",
            stored.student_id,
            stored.game_id,
            stored.points
        );

        Ok(RecordActivityResponse {
            record: stored,
            level_passed,
        })
    }

    pub async fn student_progress(&self, student_id: &str) -> AppResult<StudentProgressView> {
        let records = self.repository.find_by_student(student_id).await?;
        Ok(StatisticsService::compute_student_progress(
            &records, student_id,
        ))
    }

    pub async fn student_game_progress(
        &self,
        student_id: &str,
        game_id: &str,
    ) -> AppResult<GameProgress> {
        let records = self
            .repository
            .find_by_student_and_game(student_id, game_id)
            .await?;
        Ok(StatisticsService::compute_game_progress(&records, game_id))
    }

    pub async fn game_statistics(&self, game_id: &str) -> AppResult<GameStatisticsView> {
        let records = self.repository.find_by_game(game_id).await?;
        Ok(StatisticsService::compute_game_statistics(&records, game_id))
    }

    fn build_record(&self, request: RecordActivityRequest) -> AppResult<ActivityResult> {
        let mut missing = Vec::new();

        if request.student_id.as_deref().unwrap_or("").is_empty() {
            missing.push("studentId");
        }
        if request.game_id.as_deref().unwrap_or("").is_empty() {
            missing.push("gameId");
        }
        if request.level.is_none() {
            missing.push("level");
        }
        if request.activity.is_none() {
            missing.push("activity");
        }
        if request.points.is_none() {
            missing.push("points");
        }
        if request.attempts.is_none() {
            missing.push("attempts");
        }
        if request.is_completed.is_none() {
            missing.push("isCompleted");
        }

        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing.join(", ")));
        }

        let mut invalid = Vec::new();

        let level = non_negative(request.level, "level", &mut invalid);
        let activity = non_negative(request.activity, "activity", &mut invalid);
        let attempts = non_negative(request.attempts, "attempts", &mut invalid);
        let correct_answers = non_negative(request.correct_answers, "correctAnswers", &mut invalid);
        let total_questions = non_negative(request.total_questions, "totalQuestions", &mut invalid);

        let points = request.points.unwrap_or(0);
        if points < 0 {
            invalid.push("points");
        }

        // Levels are 1-indexed on the unlock side; absent means the
        // client predates the field and only level 1 is known unlocked.
        let max_unlocked_level = match request.max_unlocked_level {
            None => 1,
            Some(value) if value >= 1 => match u32::try_from(value) {
                Ok(level) => level,
                Err(_) => {
                    invalid.push("maxUnlockedLevel");
                    1
                }
            },
            Some(_) => {
                invalid.push("maxUnlockedLevel");
                1
            }
        };

        if let Some(time) = request.completion_time {
            if time < 0.0 || !time.is_finite() {
                invalid.push("completionTime");
            }
        }

        if let (Some(correct), Some(total)) = (correct_answers, total_questions) {
            if correct > total {
                invalid.push("correctAnswers");
            }
        }

        if !invalid.is_empty() {
            return Err(AppError::InvalidFieldValues(invalid.join(", ")));
        }

        Ok(ActivityResult {
            id: Some(Uuid::new_v4().to_string()),
            student_id: request.student_id.unwrap_or_default(),
            game_id: request.game_id.unwrap_or_default(),
            level: level.unwrap_or(0),
            activity: activity.unwrap_or(0),
            points,
            attempts: attempts.unwrap_or(0),
            correct_answers,
            total_questions,
            completion_time: request.completion_time,
            is_completed: request.is_completed.unwrap_or(false),
            max_unlocked_level,
            session_start_time: request.session_start_time,
            session_end_time: request.session_end_time,
            created_at: Utc::now(),
        })
    }
}

fn non_negative(value: Option<i64>, field: &'static str, invalid: &mut Vec<&'static str>) -> Option<u32> {
    // Negative and beyond-u32 values are both out of domain; neither may
    // slip through as a wrapped or truncated number.
    match value {
        None => None,
        Some(v) => match u32::try_from(v) {
            Ok(converted) => Some(converted),
            Err(_) => {
                invalid.push(field);
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;
    use crate::repositories::activity_result_repository::MockActivityResultRepository;

    fn request() -> RecordActivityRequest {
        RecordActivityRequest {
            student_id: Some("s1".to_string()),
            game_id: Some("counting".to_string()),
            level: Some(0),
            activity: Some(2),
            points: Some(100),
            attempts: Some(2),
            correct_answers: Some(2),
            total_questions: Some(2),
            completion_time: Some(42.5),
            is_completed: Some(true),
            max_unlocked_level: Some(2),
            session_start_time: None,
            session_end_time: None,
        }
    }

    fn service_with_mock(mock: MockActivityResultRepository) -> ActivityService {
        ActivityService::new(
            Arc::new(mock),
            ScoreService::new(ScoringConfig::default()),
        )
    }

    #[tokio::test]
    async fn test_record_activity_appends_and_grades() {
        let mut mock = MockActivityResultRepository::new();
        mock.expect_append().times(1).returning(Ok);

        let service = service_with_mock(mock);
        let response = service.record_activity(request()).await.unwrap();

        assert!(response.record.id.is_some());
        assert_eq!(response.record.student_id, "s1");
        // 100 of 100 possible at level 0 with 2 questions
        assert!(response.level_passed);
    }

    #[tokio::test]
    async fn test_missing_fields_rejected_before_append() {
        let mock = MockActivityResultRepository::new(); // append would panic

        let service = service_with_mock(mock);
        let mut bad = request();
        bad.student_id = None;
        bad.points = None;

        let err = service.record_activity(bad).await.unwrap_err();
        match err {
            AppError::MissingFields(fields) => {
                assert!(fields.contains("studentId"));
                assert!(fields.contains("points"));
            }
            other => panic!("expected MissingFields, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_ids_count_as_missing() {
        let service = service_with_mock(MockActivityResultRepository::new());
        let mut bad = request();
        bad.game_id = Some(String::new());

        let err = service.record_activity(bad).await.unwrap_err();
        assert_eq!(err.error_code(), "MISSING_REQUIRED_FIELDS");
    }

    #[tokio::test]
    async fn test_invalid_values_rejected_before_append() {
        let service = service_with_mock(MockActivityResultRepository::new());
        let mut bad = request();
        bad.level = Some(-1);
        bad.points = Some(-5);

        let err = service.record_activity(bad).await.unwrap_err();
        match err {
            AppError::InvalidFieldValues(fields) => {
                assert!(fields.contains("level"));
                assert!(fields.contains("points"));
            }
            other => panic!("expected InvalidFieldValues, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_oversized_values_rejected_not_truncated() {
        let service = service_with_mock(MockActivityResultRepository::new());
        let mut bad = request();
        // One past u32::MAX would wrap to level 0 under a plain cast
        bad.level = Some(i64::from(u32::MAX) + 1);

        let err = service.record_activity(bad).await.unwrap_err();
        match err {
            AppError::InvalidFieldValues(fields) => assert!(fields.contains("level")),
            other => panic!("expected InvalidFieldValues, got {:?}", other),
        }

        let service = service_with_mock(MockActivityResultRepository::new());
        let mut bad = request();
        bad.max_unlocked_level = Some(i64::from(u32::MAX) + 1);

        let err = service.record_activity(bad).await.unwrap_err();
        assert_eq!(err.error_code(), "INVALID_FIELD_VALUES");
    }

    #[tokio::test]
    async fn test_correct_answers_cannot_exceed_total_questions() {
        let service = service_with_mock(MockActivityResultRepository::new());
        let mut bad = request();
        bad.correct_answers = Some(5);
        bad.total_questions = Some(2);

        let err = service.record_activity(bad).await.unwrap_err();
        assert_eq!(err.error_code(), "INVALID_FIELD_VALUES");
    }

    #[tokio::test]
    async fn test_optional_counters_may_be_absent() {
        let mut mock = MockActivityResultRepository::new();
        mock.expect_append().times(1).returning(Ok);

        let service = service_with_mock(mock);
        let mut minimal = request();
        minimal.correct_answers = None;
        minimal.total_questions = None;
        minimal.completion_time = None;
        minimal.max_unlocked_level = None;

        let response = service.record_activity(minimal).await.unwrap();
        assert_eq!(response.record.max_unlocked_level, 1);
        // No reported questions means no pass verdict
        assert!(!response.level_passed);
    }

    #[tokio::test]
    async fn test_student_progress_folds_store_contents() {
        let mut mock = MockActivityResultRepository::new();
        mock.expect_find_by_student().returning(|student_id| {
            Ok(vec![
                ActivityResult::test_record(student_id, "g1", 100),
                ActivityResult::test_record(student_id, "g2", 80),
            ])
        });

        let service = service_with_mock(mock);
        let view = service.student_progress("s1").await.unwrap();

        assert_eq!(view.total_points, 180);
        assert_eq!(view.total_games_played, 2);
    }
}
