//! The ecosystem state and its per-tick pipeline.
//!
//! [`EcosystemState`] owns the species registry, the species factory, the
//! statistics collector and the single RNG all stochastic decisions draw
//! from. Each [`tick`](EcosystemState::tick) runs five phases in a fixed
//! order: snapshot, update, reproduction, statistics, cleanup. Species are
//! always visited in sorted name order so that seeded runs reproduce
//! exactly.

use crate::config::EcosystemConfig;
use crate::error::{EcosystemError, Result};
use crate::factory::SpeciesFactory;
use crate::lifecycle;
use crate::registry::SpeciesRegistry;
use crate::snapshot::WorldView;
use crate::spatial::PositionIndex;
use crate::stats::TickStats;
use ecotone_data::{Individual, IndividualSnapshot, PopulationReport, Position};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;

/// A running ecosystem simulation.
#[derive(Debug)]
pub struct EcosystemState {
    config: EcosystemConfig,
    time_step: u64,
    registry: SpeciesRegistry,
    factory: SpeciesFactory,
    rng: ChaCha8Rng,
    stats: TickStats,
}

impl EcosystemState {
    /// Builds a world from the configuration using the built-in species.
    ///
    /// # Errors
    /// Returns [`EcosystemError::InvalidConfig`] if validation fails and
    /// [`EcosystemError::UnknownSpecies`] if the configuration names a
    /// species the factory cannot build.
    pub fn new(config: EcosystemConfig) -> Result<Self> {
        Self::new_with_factory(config, SpeciesFactory::with_defaults())
    }

    /// Same as [`new`](Self::new) but with a caller-supplied factory.
    pub fn new_with_factory(config: EcosystemConfig, factory: SpeciesFactory) -> Result<Self> {
        config
            .validate()
            .map_err(|e| EcosystemError::InvalidConfig(e.to_string()))?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut state = Self {
            config,
            time_step: 0,
            registry: SpeciesRegistry::new(),
            factory,
            rng,
            stats: TickStats::new(),
        };
        state.initialize_populations()?;
        Ok(state)
    }

    fn initialize_populations(&mut self) -> Result<()> {
        for (name, &count) in &self.config.initial_counts {
            self.registry.register(name.clone(), count);
        }
        for name in self.registry.names() {
            let count = self.registry.initial_count(&name)?;
            for _ in 0..count {
                let position = Position {
                    x: self.rng.gen_range(0.0..self.config.world_width),
                    y: self.rng.gen_range(0.0..self.config.world_height),
                };
                let individual = self.factory.create(&name, position)?;
                self.registry.add(&name, individual)?;
            }
            tracing::debug!(species = %name, count = count, "Population seeded");
        }
        Ok(())
    }

    /// Immutable snapshot of the world taken at the start of a tick.
    /// Producers measure crowding against these positions regardless of
    /// what happens later in the same tick.
    fn world_view(&self) -> WorldView {
        let mut producer_positions = BTreeMap::new();
        for name in self.registry.names() {
            let list = self.registry.list(&name).unwrap_or(&[]);
            if list.iter().any(|i| i.role.is_producer()) {
                producer_positions.insert(name, PositionIndex::from_individuals(list));
            }
        }
        WorldView {
            world_width: self.config.world_width,
            world_height: self.config.world_height,
            time_step: self.time_step,
            producer_positions,
        }
    }

    /// Advances the simulation by one tick.
    pub fn tick(&mut self) -> Result<()> {
        // 1. Snapshot
        let view = self.world_view();

        // 2. Update phase. Each species list is detached while its members
        // run so they can mutate prey in the rest of the registry.
        for name in self.registry.names() {
            let mut list = self.registry.take_list(&name)?;
            for individual in &mut list {
                lifecycle::update_individual(individual, &view, &mut self.registry, &mut self.rng);
            }
            self.registry.put_list(&name, list)?;
        }

        // 3. Reproduction phase. Offspring are buffered and appended only
        // after the whole species has been scanned.
        for name in self.registry.names() {
            let mut list = self.registry.take_list(&name)?;
            let mut offspring = Vec::new();
            for individual in &mut list {
                if let Some(child) = lifecycle::try_reproduce(individual, &self.config, &mut self.rng)
                {
                    offspring.push(child);
                }
            }
            self.registry.put_list(&name, list)?;
            if !offspring.is_empty() {
                let births = offspring.len() as u64;
                tracing::debug!(species = %name, births = births, "Offspring spawned");
                self.stats.record_births(&name, births);
                self.registry.extend(&name, offspring)?;
            }
        }

        // 4. Statistics, counted before the dead are removed.
        self.stats.push_history(self.species_counts());

        // 5. Cleanup
        for name in self.registry.names() {
            let dead = self
                .registry
                .list(&name)?
                .iter()
                .filter(|i| !i.alive)
                .count() as u64;
            if dead > 0 {
                tracing::debug!(species = %name, deaths = dead, "Removing dead individuals");
                self.stats.record_deaths(&name, dead);
                self.registry.filter_to_alive(&name)?;
            }
        }

        self.time_step += 1;
        Ok(())
    }

    #[must_use]
    pub fn time_step(&self) -> u64 {
        self.time_step
    }

    #[must_use]
    pub fn config(&self) -> &EcosystemConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &SpeciesRegistry {
        &self.registry
    }

    /// Inserts an externally built individual into a registered species.
    ///
    /// # Errors
    /// Returns [`EcosystemError::UnknownSpecies`] for unregistered names.
    pub fn spawn(&mut self, name: &str, individual: Individual) -> Result<()> {
        self.registry.add(name, individual)
    }

    /// Alive-inclusive population counts per species.
    #[must_use]
    pub fn species_counts(&self) -> BTreeMap<String, usize> {
        self.registry
            .names()
            .into_iter()
            .map(|name| {
                let count = self.registry.count(&name).unwrap_or(0);
                (name, count)
            })
            .collect()
    }

    /// Names of registered species whose population has reached zero.
    #[must_use]
    pub fn check_extinction(&self) -> Vec<String> {
        self.registry
            .names()
            .into_iter()
            .filter(|name| self.registry.count(name).unwrap_or(0) == 0)
            .collect()
    }

    /// Retained per-tick population counts, oldest first.
    #[must_use]
    pub fn population_history(&self) -> Vec<BTreeMap<String, usize>> {
        self.stats.history_oldest_first()
    }

    /// Copy-out snapshots of every alive individual, grouped by species.
    #[must_use]
    pub fn detail_snapshot(&self) -> BTreeMap<String, Vec<IndividualSnapshot>> {
        self.registry
            .names()
            .into_iter()
            .map(|name| {
                let snapshots = self
                    .registry
                    .list(&name)
                    .unwrap_or(&[])
                    .iter()
                    .filter(|i| i.alive)
                    .map(|i| IndividualSnapshot {
                        id: i.id,
                        x: i.position.x,
                        y: i.position.y,
                        energy: i.energy,
                        age: i.age,
                        alive: i.alive,
                        max_energy: Some(i.max_energy),
                    })
                    .collect();
                (name, snapshots)
            })
            .collect()
    }

    /// Aggregate report suitable for serialization.
    #[must_use]
    pub fn population_report(&self) -> PopulationReport {
        PopulationReport {
            tick: self.time_step,
            counts: self.species_counts(),
            births: self.stats.births().clone(),
            deaths: self.stats.deaths().clone(),
            history: self.stats.history_oldest_first(),
            extinct: self.check_extinction(),
        }
    }

    /// Discards all state and restarts from the given configuration.
    pub fn reset(&mut self, config: EcosystemConfig) -> Result<()> {
        config
            .validate()
            .map_err(|e| EcosystemError::InvalidConfig(e.to_string()))?;
        self.rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        self.config = config;
        self.time_step = 0;
        self.registry = SpeciesRegistry::new();
        self.stats.reset();
        self.initialize_populations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecotone_data::Role;

    fn small_config() -> EcosystemConfig {
        let mut initial_counts = BTreeMap::new();
        initial_counts.insert("grass".to_string(), 5);
        initial_counts.insert("cow".to_string(), 2);
        EcosystemConfig {
            world_width: 200.0,
            world_height: 200.0,
            initial_counts,
            seed: Some(42),
        }
    }

    #[test]
    fn test_new_seeds_initial_populations() {
        let state = EcosystemState::new(small_config()).unwrap();
        assert_eq!(state.registry().count("grass").unwrap(), 5);
        assert_eq!(state.registry().count("cow").unwrap(), 2);
        assert_eq!(state.time_step(), 0);
        for name in state.registry().names() {
            for individual in state.registry().list(&name).unwrap() {
                assert!(individual.position.x >= 0.0 && individual.position.x <= 200.0);
                assert!(individual.position.y >= 0.0 && individual.position.y <= 200.0);
            }
        }
    }

    #[test]
    fn test_unknown_species_in_config_fails() {
        let mut config = small_config();
        config.initial_counts.insert("dragon".to_string(), 1);
        let err = EcosystemState::new(config).err().unwrap();
        assert!(matches!(err, EcosystemError::UnknownSpecies(name) if name == "dragon"));
    }

    #[test]
    fn test_invalid_config_fails() {
        let mut config = small_config();
        config.world_width = -1.0;
        let err = EcosystemState::new(config).err().unwrap();
        assert!(matches!(err, EcosystemError::InvalidConfig(_)));
    }

    #[test]
    fn test_tick_advances_time() {
        let mut state = EcosystemState::new(small_config()).unwrap();
        state.tick().unwrap();
        state.tick().unwrap();
        assert_eq!(state.time_step(), 2);
    }

    #[test]
    fn test_cleanup_removes_dead_and_counts_deaths() {
        let mut config = small_config();
        config.initial_counts.remove("cow");
        let mut state = EcosystemState::new(config).unwrap();

        // Push one grass to the end of its life so aging kills it.
        {
            let mut list = state.registry.take_list("grass").unwrap();
            list[0].age = list[0].max_age;
            state.registry.put_list("grass", list).unwrap();
        }
        state.tick().unwrap();
        assert_eq!(state.registry().count("grass").unwrap(), 4);
        assert_eq!(state.population_report().deaths.get("grass"), Some(&1));
    }

    #[test]
    fn test_history_counts_before_cleanup() {
        let mut config = small_config();
        config.initial_counts.remove("cow");
        let mut state = EcosystemState::new(config).unwrap();
        {
            let mut list = state.registry.take_list("grass").unwrap();
            for individual in &mut list {
                individual.age = individual.max_age;
            }
            state.registry.put_list("grass", list).unwrap();
        }
        state.tick().unwrap();
        let history = state.population_history();
        // The dead are still counted in the tick they died.
        assert_eq!(history[0].get("grass"), Some(&5));
        assert_eq!(state.registry().count("grass").unwrap(), 0);
        assert_eq!(state.check_extinction(), vec!["grass".to_string()]);
    }

    #[test]
    fn test_detail_snapshot_excludes_dead() {
        let mut state = EcosystemState::new(small_config()).unwrap();
        {
            let list = state.registry.list_mut("grass").unwrap();
            list[0].alive = false;
        }
        let snapshot = state.detail_snapshot();
        assert_eq!(snapshot["grass"].len(), 4);
        assert!(snapshot["grass"].iter().all(|s| s.alive));
    }

    #[test]
    fn test_spawn_rejects_unregistered_species() {
        let mut state = EcosystemState::new(small_config()).unwrap();
        let stray = crate::species::tiger(Position { x: 1.0, y: 1.0 });
        let err = state.spawn("tiger", stray).unwrap_err();
        assert!(matches!(err, EcosystemError::UnknownSpecies(_)));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = EcosystemState::new(small_config()).unwrap();
        for _ in 0..10 {
            state.tick().unwrap();
        }
        state.reset(small_config()).unwrap();
        assert_eq!(state.time_step(), 0);
        assert_eq!(state.registry().count("grass").unwrap(), 5);
        assert!(state.population_history().is_empty());
        assert!(state.population_report().births.is_empty());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let run = |ticks: u32| -> Vec<(String, Vec<(f64, f64, f64, u32)>)> {
            let mut state = EcosystemState::new(small_config()).unwrap();
            for _ in 0..ticks {
                state.tick().unwrap();
            }
            state
                .registry()
                .names()
                .into_iter()
                .map(|name| {
                    let list = state
                        .registry()
                        .list(&name)
                        .unwrap()
                        .iter()
                        .map(|i| (i.position.x, i.position.y, i.energy, i.age))
                        .collect();
                    (name, list)
                })
                .collect()
        };
        assert_eq!(run(20), run(20));
    }

    #[test]
    fn test_consumer_roles_survive_round_trip() {
        let mut state = EcosystemState::new(small_config()).unwrap();
        state.tick().unwrap();
        for individual in state.registry().list("cow").unwrap() {
            assert!(matches!(individual.role, Role::PrimaryConsumer(_)));
        }
    }
}
