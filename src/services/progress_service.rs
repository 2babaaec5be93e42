use std::collections::HashMap;

use crate::models::domain::ActivityResult;

/// Default unlock level for a game nothing has been recorded for yet.
const DEFAULT_UNLOCKED_LEVEL: u32 = 1;

/// Per-session cache of the highest unlocked level per game. The cache is
/// advisory: the record store remains the source of truth, and
/// reconciliation can only ever raise a cached level. Owned by a single
/// session; never shared across concurrent actors.
#[derive(Clone, Debug, Default)]
pub struct ProgressTracker {
    unlocked: HashMap<String, u32>,
}

impl ProgressTracker {
    pub fn new(known_games: &[&str]) -> Self {
        let unlocked = known_games
            .iter()
            .map(|game| (game.to_string(), DEFAULT_UNLOCKED_LEVEL))
            .collect();
        Self { unlocked }
    }

    /// Monotonic: unlocking a lower level than the cached one is a no-op.
    pub fn unlock_level(&mut self, game: &str, level: u32) {
        let entry = self
            .unlocked
            .entry(game.to_string())
            .or_insert(DEFAULT_UNLOCKED_LEVEL);
        *entry = (*entry).max(level);
    }

    pub fn is_level_unlocked(&self, game: &str, level: u32) -> bool {
        level <= self.max_unlocked_level(game)
    }

    pub fn max_unlocked_level(&self, game: &str) -> u32 {
        self.unlocked
            .get(game)
            .copied()
            .unwrap_or(DEFAULT_UNLOCKED_LEVEL)
    }

    /// Merge backend-reported records into the cache: per game, the remote
    /// contribution is the max over both the `max_unlocked_level` and
    /// `level` fields, and the cache takes the max of local and remote.
    /// Remote data can raise a level, never lower it. When the fetch
    /// failed upstream, callers simply skip this and the local cache
    /// stays authoritative.
    pub fn reconcile(&mut self, remote_records: &[ActivityResult]) {
        let mut remote_max: HashMap<&str, u32> = HashMap::new();
        for record in remote_records {
            let derived = record.max_unlocked_level.max(record.level);
            let entry = remote_max.entry(record.game_id.as_str()).or_insert(0);
            *entry = (*entry).max(derived);
        }

        for (game, level) in remote_max {
            self.unlock_level(game, level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_games_start_at_level_one() {
        let tracker = ProgressTracker::new(&["counting", "sequences"]);

        assert!(tracker.is_level_unlocked("counting", 1));
        assert!(!tracker.is_level_unlocked("counting", 2));
    }

    #[test]
    fn test_unknown_game_defaults_to_level_one() {
        let tracker = ProgressTracker::new(&[]);

        assert!(tracker.is_level_unlocked("never-seen", 1));
        assert!(!tracker.is_level_unlocked("never-seen", 2));
    }

    #[test]
    fn test_unlock_is_monotonic() {
        let mut tracker = ProgressTracker::new(&["counting"]);

        tracker.unlock_level("counting", 2);
        assert_eq!(tracker.max_unlocked_level("counting"), 2);

        // Unlocking a lower level never decreases the cache
        tracker.unlock_level("counting", 1);
        assert_eq!(tracker.max_unlocked_level("counting"), 2);
    }

    #[test]
    fn test_reconcile_raises_from_remote_records() {
        let mut tracker = ProgressTracker::new(&["counting"]);

        let mut r1 = ActivityResult::test_record("s1", "counting", 100);
        r1.max_unlocked_level = 3;
        let mut r2 = ActivityResult::test_record("s1", "sequences", 80);
        r2.level = 4;
        r2.max_unlocked_level = 2;

        tracker.reconcile(&[r1, r2]);

        assert_eq!(tracker.max_unlocked_level("counting"), 3);
        // level field also contributes to the derived maximum
        assert_eq!(tracker.max_unlocked_level("sequences"), 4);
    }

    #[test]
    fn test_reconcile_never_lowers_local_state() {
        let mut tracker = ProgressTracker::new(&["counting"]);
        tracker.unlock_level("counting", 5);

        let mut remote = ActivityResult::test_record("s1", "counting", 100);
        remote.max_unlocked_level = 2;

        tracker.reconcile(&[remote]);

        assert_eq!(tracker.max_unlocked_level("counting"), 5);
    }

    #[test]
    fn test_reconcile_with_no_remote_data_is_a_no_op() {
        let mut tracker = ProgressTracker::new(&["counting"]);
        tracker.unlock_level("counting", 3);

        tracker.reconcile(&[]);

        assert_eq!(tracker.max_unlocked_level("counting"), 3);
    }
}
