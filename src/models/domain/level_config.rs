use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Numeric range and step for one difficulty level of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct LevelConfig {
    pub min: i64,
    pub max: i64,
    pub operation: i64,
}

impl LevelConfig {
    pub fn new(min: i64, max: i64, operation: i64) -> AppResult<Self> {
        let config = Self {
            min,
            max,
            operation,
        };
        config.validate()?;
        Ok(config)
    }

    /// Invariants: min ≤ max, operation > 0.
    pub fn validate(&self) -> AppResult<()> {
        if self.min > self.max {
            return Err(AppError::InvalidFieldValues(format!(
                "level range is inverted: min {} > max {}",
                self.min, self.max
            )));
        }
        if self.operation <= 0 {
            return Err(AppError::InvalidFieldValues(format!(
                "operation step must be positive, got {}",
                self.operation
            )));
        }
        Ok(())
    }
}
