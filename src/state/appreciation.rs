//! Appreciation selection and per-level counts for one highlight.

#[cfg(test)]
#[path = "appreciation_test.rs"]
mod appreciation_test;

use std::collections::BTreeMap;

use crate::net::types::AppreciationResponse;

/// Appreciation levels offered for a highlight.
pub const APPRECIATION_LEVELS: [u8; 5] = [1, 2, 3, 4, 5];

/// Selection and counters as last confirmed by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppreciationState {
    /// The level the current user has selected, if any. Exclusive.
    pub selected: Option<u8>,
    pub counts: BTreeMap<u8, u64>,
    pub total: u64,
}

impl AppreciationState {
    /// Apply the server echo for an appreciation at `level`.
    ///
    /// Unsuccessful echoes change nothing; the buttons keep their previous
    /// counts and selection.
    pub fn apply(&mut self, level: u8, response: &AppreciationResponse) {
        if !response.success {
            return;
        }
        self.selected = Some(level);
        self.counts = response
            .appreciation_stats
            .iter()
            .filter_map(|(key, count)| level_from_key(key).map(|l| (l, *count)))
            .collect();
        self.total = response.total_appreciations;
    }

    /// Count displayed on one level button.
    pub fn count_for(&self, level: u8) -> u64 {
        self.counts.get(&level).copied().unwrap_or(0)
    }

    pub fn is_selected(&self, level: u8) -> bool {
        self.selected == Some(level)
    }
}

/// Parse a `"level_N"` stats key; unknown keys are dropped.
fn level_from_key(key: &str) -> Option<u8> {
    key.strip_prefix("level_")?.parse().ok()
}
