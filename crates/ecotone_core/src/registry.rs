//! Species registry: owns every individual in the world, grouped by
//! species name.
//!
//! The registry is built once from a fixed configuration at startup and is
//! exclusively owned and mutated by `EcosystemState`. Accessors taking a
//! species name signal [`EcosystemError::UnknownSpecies`] for names that
//! were never registered; the range queries instead return an empty result,
//! because foraging probes candidate food types opportunistically.

use crate::error::{EcosystemError, Result};
use ecotone_data::{Individual, Position};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct SpeciesSlot {
    individuals: Vec<Individual>,
    initial_count: usize,
}

/// Mapping from species name to its owned individual list.
///
/// Exactly one slot per configured species name. Iteration over species is
/// always in lexicographic name order, and individuals keep their list
/// order, so per-tick processing is deterministic.
#[derive(Debug, Default)]
pub struct SpeciesRegistry {
    slots: BTreeMap<String, SpeciesSlot>,
}

impl SpeciesRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a species with its configured initial count. Individuals
    /// are added separately during population initialization.
    pub fn register(&mut self, name: impl Into<String>, initial_count: usize) {
        self.slots.insert(
            name.into(),
            SpeciesSlot {
                individuals: Vec::new(),
                initial_count,
            },
        );
    }

    /// All registered species names, in lexicographic order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.slots.keys().cloned().collect()
    }

    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    fn slot(&self, name: &str) -> Result<&SpeciesSlot> {
        self.slots
            .get(name)
            .ok_or_else(|| EcosystemError::UnknownSpecies(name.to_string()))
    }

    fn slot_mut(&mut self, name: &str) -> Result<&mut SpeciesSlot> {
        self.slots
            .get_mut(name)
            .ok_or_else(|| EcosystemError::UnknownSpecies(name.to_string()))
    }

    pub fn list(&self, name: &str) -> Result<&[Individual]> {
        Ok(&self.slot(name)?.individuals)
    }

    pub fn list_mut(&mut self, name: &str) -> Result<&mut Vec<Individual>> {
        Ok(&mut self.slot_mut(name)?.individuals)
    }

    pub fn count(&self, name: &str) -> Result<usize> {
        Ok(self.slot(name)?.individuals.len())
    }

    pub fn initial_count(&self, name: &str) -> Result<usize> {
        Ok(self.slot(name)?.initial_count)
    }

    /// Total number of individuals across all species, dead ones included
    /// until the next cleanup phase removes them.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.slots.values().map(|s| s.individuals.len()).sum()
    }

    pub fn add(&mut self, name: &str, individual: Individual) -> Result<()> {
        self.slot_mut(name)?.individuals.push(individual);
        Ok(())
    }

    pub fn extend(&mut self, name: &str, individuals: Vec<Individual>) -> Result<()> {
        self.slot_mut(name)?.individuals.extend(individuals);
        Ok(())
    }

    pub fn clear(&mut self, name: &str) -> Result<()> {
        self.slot_mut(name)?.individuals.clear();
        Ok(())
    }

    pub fn clear_all(&mut self) {
        for slot in self.slots.values_mut() {
            slot.individuals.clear();
        }
    }

    /// Removes non-alive individuals of one species in place, preserving
    /// the relative order of the survivors.
    pub fn filter_to_alive(&mut self, name: &str) -> Result<()> {
        self.slot_mut(name)?.individuals.retain(|i| i.alive);
        Ok(())
    }

    pub fn filter_all_alive(&mut self) {
        for slot in self.slots.values_mut() {
            slot.individuals.retain(|i| i.alive);
        }
    }

    /// Detaches a species list so its members can be updated while the
    /// rest of the registry stays queryable. Must be paired with
    /// [`put_list`](Self::put_list); while detached, queries against the
    /// species see an empty list.
    pub fn take_list(&mut self, name: &str) -> Result<Vec<Individual>> {
        Ok(std::mem::take(&mut self.slot_mut(name)?.individuals))
    }

    pub fn put_list(&mut self, name: &str, individuals: Vec<Individual>) -> Result<()> {
        self.slot_mut(name)?.individuals = individuals;
        Ok(())
    }

    /// Alive individuals of `name` within `radius` of `center` (inclusive).
    ///
    /// Unknown species names yield an empty result rather than an error:
    /// this query is probed opportunistically across candidate food types.
    pub fn in_range(&self, name: &str, center: &Position, radius: f64) -> Vec<&Individual> {
        match self.slots.get(name) {
            Some(slot) => slot
                .individuals
                .iter()
                .filter(|i| i.alive && center.distance_to(&i.position) <= radius)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Mutable variant of [`in_range`](Self::in_range), used by feeding to
    /// mark prey dead.
    pub fn in_range_mut(
        &mut self,
        name: &str,
        center: &Position,
        radius: f64,
    ) -> Vec<&mut Individual> {
        match self.slots.get_mut(name) {
            Some(slot) => slot
                .individuals
                .iter_mut()
                .filter(|i| i.alive && center.distance_to(&i.position) <= radius)
                .collect(),
            None => Vec::new(),
        }
    }
}
