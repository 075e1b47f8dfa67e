//! Built-in species constructors.
//!
//! Each constructor returns a fully initialized [`Individual`] at the given
//! position. Newborns start with energy equal to their reproduction cost
//! and a maximum of four times their base energy.

use ecotone_data::{ConsumerTraits, Individual, Position, ProducerTraits, Role};
use uuid::Uuid;

fn base(
    species: &str,
    position: Position,
    base_energy: f64,
    max_age: u32,
    role: Role,
) -> Individual {
    Individual {
        id: Uuid::new_v4(),
        species: species.to_string(),
        position,
        energy: base_energy,
        max_energy: base_energy * 4.0,
        age: 0,
        max_age,
        alive: true,
        death_reason: None,
        reproduction_cooldown: 0,
        reproduction_energy_cost: base_energy,
        role,
    }
}

/// Fast-spreading producer. Cheap to reproduce, heavily density-limited.
#[must_use]
pub fn grass(position: Position) -> Individual {
    base(
        "grass",
        position,
        40.0,
        2000,
        Role::Producer(ProducerTraits {
            base_growth_rate: 0.9,
            reproduction_chance: 0.4,
            competition_radius: 30.0,
            max_competition_effect: 0.9,
            spawn_spread: 200.0,
            reproduction_cooldown_ticks: 10,
        }),
    )
}

/// Grazing primary consumer. Eats any grass it reaches, no success roll.
#[must_use]
pub fn cow(position: Position) -> Individual {
    base(
        "cow",
        position,
        400.0,
        4000,
        Role::PrimaryConsumer(ConsumerTraits {
            movement_speed: 3.0,
            energy_consumption: 2.0,
            hunting_range: 5.0,
            hunting_success_rate: 1.0,
            detection_range: 800.0,
            food_types: vec!["grass".to_string()],
            hunting_cooldown: 0,
            hunting_cooldown_duration: 0,
            min_reproduction_age: 20,
            spawn_spread: 10.0,
            reproduction_cooldown_ticks: 200,
            desperation_boost: 0.0,
        }),
    )
}

/// Apex predator. Low base success rate, boosted when starving, rests
/// after a kill.
#[must_use]
pub fn tiger(position: Position) -> Individual {
    base(
        "tiger",
        position,
        4000.0,
        8000,
        Role::SecondaryConsumer(ConsumerTraits {
            movement_speed: 4.0,
            energy_consumption: 20.0,
            hunting_range: 6.0,
            hunting_success_rate: 0.2,
            detection_range: 1000.0,
            food_types: vec!["cow".to_string()],
            hunting_cooldown: 0,
            hunting_cooldown_duration: 4,
            min_reproduction_age: 30,
            spawn_spread: 40.0,
            reproduction_cooldown_ticks: 800,
            desperation_boost: 0.6,
        }),
    )
}
