use serde::{Deserialize, Serialize};

/// One anterior/posterior question: given a base number, the player names
/// the predecessor and successor offset by the level's operation step.
/// Immutable once generated; consumed by exactly one evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub base_number: i64,
    pub correct_anterior: i64,
    pub correct_posterior: i64,
    pub operation: i64,
    pub hint: String,
}
