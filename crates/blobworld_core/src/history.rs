//! Append-only, tick-ordered log of population statistics.

use blobworld_data::TickStats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsLog {
    entries: Vec<TickStats>,
}

impl StatsLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the snapshot for the next tick.
    ///
    /// Entries must arrive in strictly increasing tick order.
    pub fn record(&mut self, stats: TickStats) {
        debug_assert!(
            self.entries.last().map_or(true, |last| last.tick < stats.tick),
            "stats must be recorded in tick order"
        );
        self.entries.push(stats);
    }

    #[must_use]
    pub fn entries(&self) -> &[TickStats] {
        &self.entries
    }

    #[must_use]
    pub fn latest(&self) -> Option<&TickStats> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TickStats> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(tick: u64) -> TickStats {
        TickStats {
            tick,
            blob_count: 0,
            food_count: 0,
            speed: None,
            size: None,
            energy: None,
            births: 0,
            deaths: 0,
            food_eaten: 0,
            total_offspring: 0,
            total_mutations: 0,
        }
    }

    #[test]
    fn test_log_keeps_order() {
        let mut log = StatsLog::new();
        assert!(log.latest().is_none());
        log.record(stats(1));
        log.record(stats(2));
        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().map(|s| s.tick), Some(2));
        let ticks: Vec<u64> = log.iter().map(|s| s.tick).collect();
        assert_eq!(ticks, vec![1, 2]);
    }
}
