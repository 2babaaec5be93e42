use std::collections::BTreeMap;

use crate::models::domain::{
    ActivityResult, GameProgress, GameStatisticsView, StudentGameSummary, StudentProgressView,
};

/// Folds the flat activity-result log into progress views. Every function
/// here is a pure read-only computation: the input slice is never mutated
/// and the same records always produce identical output. Grouping uses
/// ordered maps so repeated calls serialize byte-identically.
pub struct StatisticsService;

impl StatisticsService {
    /// Summary of one student-visible game from whatever records match
    /// `game_id`. An empty match yields the all-zero view, never an error.
    ///
    /// The completion-rate denominator is the count of all matching
    /// records, whether or not they reported `total_questions`.
    pub fn compute_game_progress(records: &[ActivityResult], game_id: &str) -> GameProgress {
        let mut matching: Vec<ActivityResult> = records
            .iter()
            .filter(|r| r.game_id == game_id)
            .cloned()
            .collect();

        if matching.is_empty() {
            return GameProgress::empty(game_id);
        }

        let total_points: i64 = matching.iter().map(|r| r.points).sum();
        let max_unlocked_level = matching
            .iter()
            .map(|r| r.max_unlocked_level)
            .max()
            .unwrap_or(0);
        let last_activity = matching.iter().map(|r| r.created_at).max();

        let completed = matching.iter().filter(|r| r.is_completed).count();
        let completion_rate =
            (completed as f64 / matching.len() as f64 * 100.0).clamp(0.0, 100.0);

        // "Counters absent" is not the same as "zero correct": records
        // that never reported accuracy are left out of the mean entirely.
        let accuracies: Vec<f64> = matching.iter().filter_map(|r| r.accuracy()).collect();
        let average_accuracy = if accuracies.is_empty() {
            0.0
        } else {
            accuracies.iter().sum::<f64>() / accuracies.len() as f64
        };

        // Most recent first; sort is stable so equal timestamps keep
        // their input order.
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        GameProgress {
            game_id: game_id.to_string(),
            total_points,
            completion_rate,
            average_accuracy,
            max_unlocked_level,
            last_activity,
            statistics: matching,
        }
    }

    /// All games one student has touched, with cross-game totals. A
    /// student with no records gets an empty view.
    pub fn compute_student_progress(
        records: &[ActivityResult],
        student_id: &str,
    ) -> StudentProgressView {
        let student_records: Vec<ActivityResult> = records
            .iter()
            .filter(|r| r.student_id == student_id)
            .cloned()
            .collect();

        let mut by_game: BTreeMap<String, Vec<ActivityResult>> = BTreeMap::new();
        for record in &student_records {
            by_game
                .entry(record.game_id.clone())
                .or_default()
                .push(record.clone());
        }

        let game_progress: Vec<GameProgress> = by_game
            .iter()
            .map(|(game_id, group)| Self::compute_game_progress(group, game_id))
            .collect();

        let total_points = student_records.iter().map(|r| r.points).sum();

        StudentProgressView {
            student_id: student_id.to_string(),
            total_games_played: by_game.len(),
            game_progress,
            total_points,
        }
    }

    /// Cross-student summary of one game. Per-student metrics reuse the
    /// per-game fold scoped to that student's records; the game-wide
    /// numbers are unweighted means over students. All metrics are 0 when
    /// nothing matches.
    pub fn compute_game_statistics(
        records: &[ActivityResult],
        game_id: &str,
    ) -> GameStatisticsView {
        let game_records: Vec<ActivityResult> = records
            .iter()
            .filter(|r| r.game_id == game_id)
            .cloned()
            .collect();

        let mut by_student: BTreeMap<String, Vec<ActivityResult>> = BTreeMap::new();
        for record in &game_records {
            by_student
                .entry(record.student_id.clone())
                .or_default()
                .push(record.clone());
        }

        let student_progress: Vec<StudentGameSummary> = by_student
            .iter()
            .map(|(student_id, group)| StudentGameSummary {
                student_id: student_id.clone(),
                progress: Self::compute_game_progress(group, game_id),
            })
            .collect();

        let total_students = student_progress.len();
        let (average_points, average_accuracy, completion_rate) = if total_students == 0 {
            (0.0, 0.0, 0.0)
        } else {
            let n = total_students as f64;
            (
                student_progress
                    .iter()
                    .map(|s| s.progress.total_points as f64)
                    .sum::<f64>()
                    / n,
                student_progress
                    .iter()
                    .map(|s| s.progress.average_accuracy)
                    .sum::<f64>()
                    / n,
                student_progress
                    .iter()
                    .map(|s| s.progress.completion_rate)
                    .sum::<f64>()
                    / n,
            )
        };

        GameStatisticsView {
            game_id: game_id.to_string(),
            total_students,
            student_progress,
            average_points,
            average_accuracy,
            completion_rate,
        }
    }
}
