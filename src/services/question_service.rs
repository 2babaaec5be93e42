use rand::Rng;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{LevelConfig, Question},
};

/// Generates anterior/posterior questions for a level's numeric range.
pub struct QuestionService;

impl QuestionService {
    /// Uniform draw from [min, max] inclusive.
    pub fn generate_random_number(config: &LevelConfig) -> AppResult<i64> {
        config.validate()?;
        Ok(rand::thread_rng().gen_range(config.min..=config.max))
    }

    /// Build a question around a freshly drawn base number. The anterior
    /// may go below zero when min < operation; that is accepted behavior,
    /// not clamped. Ranges whose edges would overflow i64 when stepped
    /// are rejected, since the config arrives straight from query params.
    pub fn create_question(config: &LevelConfig) -> AppResult<Question> {
        let base_number = Self::generate_random_number(config)?;

        let correct_anterior = base_number.checked_sub(config.operation).ok_or_else(|| {
            AppError::InvalidFieldValues(format!(
                "level range [{}, {}] with step {} exceeds the representable number range",
                config.min, config.max, config.operation
            ))
        })?;
        let correct_posterior = base_number.checked_add(config.operation).ok_or_else(|| {
            AppError::InvalidFieldValues(format!(
                "level range [{}, {}] with step {} exceeds the representable number range",
                config.min, config.max, config.operation
            ))
        })?;

        Ok(Question {
            base_number,
            correct_anterior,
            correct_posterior,
            operation: config.operation,
            hint: format!("Count in steps of {}", config.operation),
        })
    }
}
