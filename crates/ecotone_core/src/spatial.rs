//! Per-tick position indexes for density queries.
//!
//! The naive form of a range query walks a species list and is O(n) per
//! query. Producer density estimation runs one query per producer per
//! tick, so the snapshot phase precomputes a flat array of alive positions
//! once and every density query scans that array instead of the registry.

use ecotone_data::{Individual, Position};
use uuid::Uuid;

/// Flat array of `(id, position)` pairs for the alive members of one
/// species, captured at the start of a tick.
#[derive(Debug, Clone, Default)]
pub struct PositionIndex {
    entries: Vec<(Uuid, f64, f64)>,
}

impl PositionIndex {
    /// Captures the alive individuals of a species list.
    #[must_use]
    pub fn from_individuals(individuals: &[Individual]) -> Self {
        Self {
            entries: individuals
                .iter()
                .filter(|i| i.alive)
                .map(|i| (i.id, i.position.x, i.position.y))
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of indexed individuals within `radius` of `center`
    /// (inclusive), excluding the individual identified by `exclude`.
    #[must_use]
    pub fn count_within(&self, center: &Position, radius: f64, exclude: Uuid) -> usize {
        self.entries
            .iter()
            .filter(|&&(id, x, y)| {
                id != exclude && center.distance_to(&Position { x, y }) <= radius
            })
            .count()
    }
}
