//! Individual base lifecycle: aging, death, movement, and reproduction.
//!
//! An individual is a small state machine: `Alive` until one of old age,
//! starvation, or predation marks it dead, and `Dead` is terminal. Old-age
//! death is evaluated during aging and therefore wins over any energy-based
//! death cause later in the same tick. Predation is triggered by another
//! individual's update; once marked dead the victim takes no further action
//! for the remainder of the tick.

use crate::config::EcosystemConfig;
use crate::consumer;
use crate::producer;
use crate::registry::SpeciesRegistry;
use crate::snapshot::WorldView;
use ecotone_data::{DeathReason, Individual, Position, Role};
use rand::Rng;
use uuid::Uuid;

/// Marks an individual dead with the given reason. The reason is recorded
/// exactly once; later death causes in the same tick are ignored.
pub fn die(individual: &mut Individual, reason: DeathReason) {
    if individual.alive {
        individual.alive = false;
        individual.death_reason = Some(reason);
    }
}

/// Advances age by one tick. Reaching `max_age` forces death with reason
/// "old age" before any other death cause is evaluated this tick.
pub fn age_one_step(individual: &mut Individual) {
    individual.age += 1;
    if individual.age >= individual.max_age {
        die(individual, DeathReason::OldAge);
    }
}

/// Shared start of every role-specific update: reproduction cooldown decay
/// followed by aging. Dead individuals are left untouched.
pub fn base_update(individual: &mut Individual) {
    if !individual.alive {
        return;
    }
    if individual.reproduction_cooldown > 0 {
        individual.reproduction_cooldown -= 1;
    }
    age_one_step(individual);
}

/// Base reproduction eligibility; role-specific gates come on top.
#[must_use]
pub fn can_reproduce(individual: &Individual) -> bool {
    individual.alive
        && individual.energy >= individual.reproduction_energy_cost * 2.0
        && individual.reproduction_cooldown == 0
}

/// Moves one step of `speed` in a uniformly random heading, clamped to
/// world bounds.
pub fn move_randomly<R: Rng>(
    position: &mut Position,
    speed: f64,
    world_width: f64,
    world_height: f64,
    rng: &mut R,
) {
    let angle = rng.gen_range(0.0..std::f64::consts::TAU);
    position.x = (position.x + angle.cos() * speed).clamp(0.0, world_width);
    position.y = (position.y + angle.sin() * speed).clamp(0.0, world_height);
}

/// Moves up to `speed` units straight toward `target`, clamped to world
/// bounds. A zero-length movement vector is a no-op, not an error.
pub fn move_towards(
    position: &mut Position,
    target: &Position,
    speed: f64,
    world_width: f64,
    world_height: f64,
) {
    let dx = target.x - position.x;
    let dy = target.y - position.y;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance > 0.0 {
        position.x = (position.x + dx / distance * speed).clamp(0.0, world_width);
        position.y = (position.y + dy / distance * speed).clamp(0.0, world_height);
    }
}

/// Role dispatch for the update phase.
pub fn update_individual<R: Rng>(
    individual: &mut Individual,
    view: &WorldView,
    registry: &mut SpeciesRegistry,
    rng: &mut R,
) {
    match individual.role {
        Role::Producer(_) => producer::update(individual, view),
        Role::PrimaryConsumer(_) | Role::SecondaryConsumer(_) => {
            consumer::update(individual, view, registry, rng);
        }
    }
}

/// One reproduction attempt, producing at most one offspring.
///
/// On success the parent pays `reproduction_energy_cost`, its cooldown is
/// reset to the role's constant, and the offspring spawns within a bounded
/// random offset of the parent. A producer rejects the attempt outright if
/// the unclamped target position would fall outside world bounds; consumer
/// offspring are clamped instead.
pub fn try_reproduce<R: Rng>(
    individual: &mut Individual,
    config: &EcosystemConfig,
    rng: &mut R,
) -> Option<Individual> {
    if !can_reproduce(individual) {
        return None;
    }
    match &individual.role {
        Role::Producer(traits) => {
            // Eligible but stochastic: one gate roll per attempt.
            if rng.gen::<f64>() >= traits.reproduction_chance {
                return None;
            }
            let x = individual.position.x + rng.gen_range(-traits.spawn_spread..=traits.spawn_spread);
            let y = individual.position.y + rng.gen_range(-traits.spawn_spread..=traits.spawn_spread);
            if x <= 0.0 || x >= config.world_width || y <= 0.0 || y >= config.world_height {
                return None;
            }
            let cooldown = traits.reproduction_cooldown_ticks;
            individual.energy -= individual.reproduction_energy_cost;
            individual.reproduction_cooldown = cooldown;
            Some(spawn_offspring(individual, Position { x, y }))
        }
        Role::PrimaryConsumer(traits) | Role::SecondaryConsumer(traits) => {
            if individual.age <= traits.min_reproduction_age {
                return None;
            }
            let x = (individual.position.x
                + rng.gen_range(-traits.spawn_spread..=traits.spawn_spread))
            .clamp(0.0, config.world_width);
            let y = (individual.position.y
                + rng.gen_range(-traits.spawn_spread..=traits.spawn_spread))
            .clamp(0.0, config.world_height);
            let cooldown = traits.reproduction_cooldown_ticks;
            individual.energy -= individual.reproduction_energy_cost;
            individual.reproduction_cooldown = cooldown;
            Some(spawn_offspring(individual, Position { x, y }))
        }
    }
}

/// Builds an offspring of the parent's species and role at `position`,
/// with fresh vital state.
fn spawn_offspring(parent: &Individual, position: Position) -> Individual {
    let mut role = parent.role.clone();
    if let Role::PrimaryConsumer(traits) | Role::SecondaryConsumer(traits) = &mut role {
        traits.hunting_cooldown = 0;
    }
    Individual {
        id: Uuid::new_v4(),
        species: parent.species.clone(),
        position,
        energy: parent.reproduction_energy_cost,
        max_energy: parent.max_energy,
        age: 0,
        max_age: parent.max_age,
        alive: true,
        death_reason: None,
        reproduction_cooldown: 0,
        reproduction_energy_cost: parent.reproduction_energy_cost,
        role,
    }
}
