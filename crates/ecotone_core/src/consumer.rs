//! Consumer foraging and hunting model, shared by primary and secondary
//! consumers.
//!
//! Each tick a consumer either rests (while its hunting cooldown is still
//! running) or forages: it scans its food species in declared order for
//! the globally nearest detectable prey, moves toward it (or wanders when
//! nothing is in detection range), pays its metabolic cost, and then tries
//! to feed inside its much smaller eating/hunting range. Primary consumers
//! eat the first in-range prey outright; apex consumers roll per candidate
//! against a state-dependent success rate and rest after a kill.

use crate::lifecycle;
use crate::registry::SpeciesRegistry;
use crate::snapshot::WorldView;
use ecotone_data::{ConsumerTraits, DeathReason, Individual, Position, Role};
use rand::Rng;

/// The hunting success rate in effect this tick.
///
/// For apex consumers the base rate gets a desperation boost while energy
/// sits at or below a third of the reproduction cost, scaled by the
/// fraction of lifespan remaining.
#[must_use]
pub fn effective_hunting_rate(individual: &Individual) -> f64 {
    match &individual.role {
        Role::SecondaryConsumer(traits) => {
            if individual.energy <= individual.reproduction_energy_cost / 3.0 {
                traits.hunting_success_rate
                    + traits.desperation_boost
                        * (1.0 - f64::from(individual.age) / f64::from(individual.max_age))
            } else {
                traits.hunting_success_rate
            }
        }
        Role::PrimaryConsumer(traits) => traits.hunting_success_rate,
        Role::Producer(_) => 0.0,
    }
}

/// Position of the nearest alive prey across all food types within
/// detection range. Ties go to the earliest food type, then to list order.
fn nearest_food(
    position: &Position,
    traits: &ConsumerTraits,
    registry: &SpeciesRegistry,
) -> Option<Position> {
    let mut best: Option<(f64, Position)> = None;
    for food in &traits.food_types {
        for prey in registry.in_range(food, position, traits.detection_range) {
            let distance = position.distance_to(&prey.position);
            if best.map_or(true, |(best_distance, _)| distance < best_distance) {
                best = Some((distance, prey.position));
            }
        }
    }
    best.map(|(_, position)| position)
}

/// Per-tick consumer update: cooldown and aging, movement, metabolism,
/// feeding, starvation check.
pub fn update<R: Rng>(
    individual: &mut Individual,
    view: &WorldView,
    registry: &mut SpeciesRegistry,
    rng: &mut R,
) {
    lifecycle::base_update(individual);
    if !individual.alive {
        return;
    }
    let apex = matches!(individual.role, Role::SecondaryConsumer(_));
    let success_rate = effective_hunting_rate(individual);
    let traits = match &mut individual.role {
        Role::PrimaryConsumer(traits) | Role::SecondaryConsumer(traits) => traits,
        Role::Producer(_) => return,
    };

    // A cooldown that is still running after this tick's decrement keeps
    // the consumer resting: no movement, no feeding.
    let mut resting = false;
    if traits.hunting_cooldown > 0 {
        traits.hunting_cooldown -= 1;
        resting = traits.hunting_cooldown > 0;
    }

    if !resting {
        match nearest_food(&individual.position, traits, registry) {
            Some(target) => lifecycle::move_towards(
                &mut individual.position,
                &target,
                traits.movement_speed,
                view.world_width,
                view.world_height,
            ),
            None => lifecycle::move_randomly(
                &mut individual.position,
                traits.movement_speed,
                view.world_width,
                view.world_height,
                rng,
            ),
        }
    }

    individual.energy -= traits.energy_consumption;

    if !resting {
        let mut gained = None;
        'feeding: for food in &traits.food_types {
            for prey in registry.in_range_mut(food, &individual.position, traits.hunting_range) {
                if apex && rng.gen::<f64>() >= success_rate {
                    continue;
                }
                gained = Some(prey.energy);
                lifecycle::die(
                    prey,
                    DeathReason::Predation {
                        by: individual.species.clone(),
                    },
                );
                break 'feeding;
            }
        }
        if let Some(gain) = gained {
            individual.energy = (individual.energy + gain).min(individual.max_energy);
            if apex {
                traits.hunting_cooldown = traits.hunting_cooldown_duration;
            }
        }
    }

    if individual.energy <= 0.0 {
        lifecycle::die(individual, DeathReason::Starvation);
    }
}
