use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    config::ScoringConfig,
    errors::{AppError, AppResult},
    models::domain::Question,
};

static INTEGER_INPUT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+$").expect("INTEGER_INPUT_REGEX is a valid regex pattern"));

/// Pure scoring functions for a played activity. All methods are
/// deterministic given the configured constants.
pub struct ScoreService {
    scoring: ScoringConfig,
}

impl ScoreService {
    pub fn new(scoring: ScoringConfig) -> Self {
        Self { scoring }
    }

    /// Score for finishing an activity: a per-level base minus a flat
    /// penalty per attempt, floored at zero. Higher levels always score
    /// at least as much, more attempts never score more.
    pub fn calculate_activity_score(&self, level: u32, attempts: u32) -> i64 {
        let base = self.scoring.base_score * (i64::from(level) + 1);
        let penalty = i64::from(attempts) * self.scoring.penalty_per_attempt;
        (base - penalty).max(0)
    }

    /// Points earned as a rounded percentage of the maximum possible for
    /// this level. A zero-question activity has no defined percentage and
    /// is rejected rather than silently producing a division by zero.
    pub fn calculate_percentage(
        &self,
        points: i64,
        total_questions: u32,
        level: u32,
    ) -> AppResult<i64> {
        let max_possible =
            i64::from(total_questions) * self.scoring.base_score * (i64::from(level) + 1);
        if max_possible == 0 {
            return Err(AppError::InvalidFieldValues(
                "cannot compute a percentage for an activity with no questions".to_string(),
            ));
        }

        Ok((points as f64 / max_possible as f64 * 100.0).round() as i64)
    }

    pub fn is_level_passed(
        &self,
        points: i64,
        total_questions: u32,
        level: u32,
    ) -> AppResult<bool> {
        let percentage = self.calculate_percentage(points, total_questions, level)?;
        Ok(percentage >= self.scoring.passing_percentage)
    }

    /// Exact-match grading: the answer is trimmed and parsed as a base-10
    /// integer. Anything unparseable is wrong; there is no partial credit.
    pub fn is_answer_correct(&self, answer: &str, expected: i64) -> bool {
        answer
            .trim()
            .parse::<i64>()
            .map(|parsed| parsed == expected)
            .unwrap_or(false)
    }

    /// Whether a text field holds a well-formed (possibly negative)
    /// integer. Empty means "not yet answered" and is accepted.
    pub fn is_valid_number(value: &str) -> bool {
        value.is_empty() || INTEGER_INPUT_REGEX.is_match(value)
    }

    /// Escalating hint ladder keyed only on attempt count:
    /// tier 0/1 names the step size, tier 2 the direction of the two
    /// answers, tier 3+ spells out the concrete values.
    pub fn get_progressive_hint(&self, attempts: u32, question: &Question) -> String {
        if attempts >= self.scoring.max_attempts_for_hint {
            format!(
                "The number before {} is {} and the number after is {}",
                question.base_number, question.correct_anterior, question.correct_posterior
            )
        } else if attempts == 2 {
            format!(
                "Subtract {} to find the number before, add {} to find the number after",
                question.operation, question.operation
            )
        } else {
            format!("Count in steps of {}", question.operation)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ScoreService {
        ScoreService::new(ScoringConfig::default())
    }

    fn question() -> Question {
        Question {
            base_number: 10,
            correct_anterior: 7,
            correct_posterior: 13,
            operation: 3,
            hint: "Count in steps of 3".to_string(),
        }
    }

    #[test]
    fn test_activity_score_base_cases() {
        let service = service();

        assert_eq!(service.calculate_activity_score(0, 0), 50);
        assert_eq!(service.calculate_activity_score(2, 3), 135);
    }

    #[test]
    fn test_activity_score_never_negative() {
        let service = service();

        assert_eq!(service.calculate_activity_score(0, 100), 0);
    }

    #[test]
    fn test_activity_score_monotonic_in_attempts_and_level() {
        let service = service();

        for level in 0..5 {
            let mut previous = i64::MAX;
            for attempts in 0..30 {
                let score = service.calculate_activity_score(level, attempts);
                assert!(score >= 0);
                assert!(score <= previous, "score increased with more attempts");
                previous = score;
            }
        }

        for attempts in 0..10 {
            let mut previous = i64::MIN;
            for level in 0..5 {
                let score = service.calculate_activity_score(level, attempts);
                assert!(score >= previous, "score decreased with higher level");
                previous = score;
            }
        }
    }

    #[test]
    fn test_percentage_rounding() {
        let service = service();

        // 100 of 150 possible (3 questions at level 0) = 66.67 -> 67
        assert_eq!(service.calculate_percentage(100, 3, 0).unwrap(), 67);
        assert_eq!(service.calculate_percentage(150, 3, 0).unwrap(), 100);
    }

    #[test]
    fn test_percentage_zero_denominator_is_an_error() {
        let service = service();

        let err = service.calculate_percentage(100, 0, 0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_FIELD_VALUES");

        // is_level_passed propagates the same guard
        assert!(service.is_level_passed(100, 0, 0).is_err());
    }

    #[test]
    fn test_passing_boundary() {
        let service = service();

        // 2 questions at level 0: max 100 points, so points == percentage
        assert!(service.is_level_passed(60, 2, 0).unwrap());
        assert!(!service.is_level_passed(59, 2, 0).unwrap());
    }

    #[test]
    fn test_answer_parsing() {
        let service = service();

        assert!(service.is_answer_correct("  42 ", 42));
        assert!(service.is_answer_correct("-7", -7));
        assert!(!service.is_answer_correct("abc", 42));
        assert!(!service.is_answer_correct("42.0", 42));
        // Empty never equals 0; only explicit numeric strings match
        assert!(!service.is_answer_correct("", 0));
    }

    #[test]
    fn test_is_valid_number() {
        assert!(ScoreService::is_valid_number(""));
        assert!(ScoreService::is_valid_number("0"));
        assert!(ScoreService::is_valid_number("42"));
        assert!(ScoreService::is_valid_number("-42"));
        assert!(!ScoreService::is_valid_number(" 42"));
        assert!(!ScoreService::is_valid_number("4.2"));
        assert!(!ScoreService::is_valid_number("-"));
        assert!(!ScoreService::is_valid_number("abc"));
    }

    #[test]
    fn test_hint_ladder_escalates() {
        let service = service();
        let question = question();

        let tier0 = service.get_progressive_hint(0, &question);
        let tier1 = service.get_progressive_hint(1, &question);
        let tier2 = service.get_progressive_hint(2, &question);
        let tier3 = service.get_progressive_hint(3, &question);
        let tier5 = service.get_progressive_hint(5, &question);

        assert_eq!(tier0, tier1);
        assert!(tier0.contains('3'));
        assert!(tier2.contains("Subtract"));
        assert!(tier3.contains('7') && tier3.contains("13"));
        assert_eq!(tier3, tier5);
    }
}
