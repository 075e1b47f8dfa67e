//! Per-run population statistics: birth and death tallies plus a bounded
//! ring of recent per-species population counts.

use std::collections::{BTreeMap, VecDeque};

/// How many ticks of population history the ring retains.
pub const HISTORY_CAP: usize = 100;

/// Accumulated statistics for one simulation run.
#[derive(Debug, Default)]
pub struct TickStats {
    births: BTreeMap<String, u64>,
    deaths: BTreeMap<String, u64>,
    history: VecDeque<BTreeMap<String, usize>>,
}

impl TickStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_births(&mut self, species: &str, count: u64) {
        if count > 0 {
            *self.births.entry(species.to_string()).or_insert(0) += count;
        }
    }

    pub fn record_deaths(&mut self, species: &str, count: u64) {
        if count > 0 {
            *self.deaths.entry(species.to_string()).or_insert(0) += count;
        }
    }

    /// Appends this tick's population counts, dropping the oldest entry
    /// once the ring is full.
    pub fn push_history(&mut self, counts: BTreeMap<String, usize>) {
        if self.history.len() == HISTORY_CAP {
            self.history.pop_front();
        }
        self.history.push_back(counts);
    }

    #[must_use]
    pub fn births(&self) -> &BTreeMap<String, u64> {
        &self.births
    }

    #[must_use]
    pub fn deaths(&self) -> &BTreeMap<String, u64> {
        &self.deaths
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Retained history, oldest tick first.
    #[must_use]
    pub fn history_oldest_first(&self) -> Vec<BTreeMap<String, usize>> {
        self.history.iter().cloned().collect()
    }

    pub fn reset(&mut self) {
        self.births.clear();
        self.deaths.clear();
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tallies_accumulate() {
        let mut stats = TickStats::new();
        stats.record_births("grass", 3);
        stats.record_births("grass", 2);
        stats.record_deaths("cow", 1);
        assert_eq!(stats.births().get("grass"), Some(&5));
        assert_eq!(stats.deaths().get("cow"), Some(&1));
    }

    #[test]
    fn test_zero_counts_leave_no_entry() {
        let mut stats = TickStats::new();
        stats.record_births("grass", 0);
        stats.record_deaths("grass", 0);
        assert!(stats.births().is_empty());
        assert!(stats.deaths().is_empty());
    }

    #[test]
    fn test_history_ring_drops_oldest() {
        let mut stats = TickStats::new();
        for tick in 0..(HISTORY_CAP + 5) {
            let mut counts = BTreeMap::new();
            counts.insert("grass".to_string(), tick);
            stats.push_history(counts);
        }
        assert_eq!(stats.history_len(), HISTORY_CAP);
        let history = stats.history_oldest_first();
        assert_eq!(history[0].get("grass"), Some(&5));
        assert_eq!(
            history[HISTORY_CAP - 1].get("grass"),
            Some(&(HISTORY_CAP + 4))
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut stats = TickStats::new();
        stats.record_births("grass", 1);
        stats.push_history(BTreeMap::new());
        stats.reset();
        assert!(stats.births().is_empty());
        assert_eq!(stats.history_len(), 0);
    }
}
