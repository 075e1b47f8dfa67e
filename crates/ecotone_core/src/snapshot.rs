//! Read-only per-tick world view.
//!
//! Built once at the start of every tick, before any individual moves, so
//! that simultaneous per-individual decisions in the update phase are not
//! skewed by individuals already processed in the same tick. For producer
//! species the view carries a precomputed [`PositionIndex`] used by the
//! density-competition model.

use crate::spatial::PositionIndex;
use std::collections::BTreeMap;

/// Immutable snapshot of the world handed to individual updates.
#[derive(Debug, Clone)]
pub struct WorldView {
    pub world_width: f64,
    pub world_height: f64,
    pub time_step: u64,
    /// Alive-position index per producer species.
    pub producer_positions: BTreeMap<String, PositionIndex>,
}

impl WorldView {
    /// Index for one producer species, if that species has producers.
    #[must_use]
    pub fn producer_index(&self, species: &str) -> Option<&PositionIndex> {
        self.producer_positions.get(species)
    }
}
