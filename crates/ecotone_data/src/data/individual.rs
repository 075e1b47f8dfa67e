use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// World position of an individual.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Euclidean distance to another position. World coordinates are flat;
    /// there is no wraparound.
    #[must_use]
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Why an individual stopped being alive. Set exactly once, when the alive
/// flag transitions to false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeathReason {
    OldAge,
    Starvation,
    Predation { by: String },
    Unspecified,
}

impl std::fmt::Display for DeathReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeathReason::OldAge => write!(f, "old age"),
            DeathReason::Starvation => write!(f, "starvation"),
            DeathReason::Predation { by } => write!(f, "predation by {by}"),
            DeathReason::Unspecified => write!(f, "unspecified"),
        }
    }
}

/// Parameters of the producer growth/competition model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProducerTraits {
    pub base_growth_rate: f64,
    /// Stochastic gate applied on top of the base reproduction eligibility.
    pub reproduction_chance: f64,
    pub competition_radius: f64,
    pub max_competition_effect: f64,
    /// Maximum offspring offset along each axis.
    pub spawn_spread: f64,
    pub reproduction_cooldown_ticks: u32,
}

/// Parameters and per-tick state of the consumer foraging/hunting model,
/// shared by primary and secondary consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumerTraits {
    pub movement_speed: f64,
    /// Energy subtracted every tick the individual is alive.
    pub energy_consumption: f64,
    /// Eating range for primary consumers, hunting range for apex consumers.
    pub hunting_range: f64,
    pub hunting_success_rate: f64,
    pub detection_range: f64,
    /// Species the consumer may eat, in preference order.
    pub food_types: Vec<String>,
    /// Ticks of forced rest remaining after a successful hunt.
    pub hunting_cooldown: u32,
    pub hunting_cooldown_duration: u32,
    /// Minimum age before reproduction is allowed.
    pub min_reproduction_age: u32,
    /// Maximum offspring offset along each axis.
    pub spawn_spread: f64,
    pub reproduction_cooldown_ticks: u32,
    /// Added to the success rate while starving, scaled by remaining
    /// lifespan. Zero for primary consumers.
    pub desperation_boost: f64,
}

/// Behavior role of an individual, with its role-specific parameters.
///
/// The role selects the update strategy applied each tick: producers grow
/// energy passively under local competition, consumers forage and hunt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Producer(ProducerTraits),
    PrimaryConsumer(ConsumerTraits),
    SecondaryConsumer(ConsumerTraits),
}

impl Role {
    #[must_use]
    pub fn is_producer(&self) -> bool {
        matches!(self, Role::Producer(_))
    }
}

/// One simulated organism.
///
/// Invariants maintained by the engine at the end of every tick:
/// - `0 <= energy <= max_energy`
/// - `alive == false` exactly when `death_reason` is set
/// - `age` increases by exactly one per tick while alive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    /// Stable identity, unique for the lifetime of the simulation. Used
    /// only for external reporting, never for control flow.
    pub id: Uuid,
    /// Registry key of the species this individual belongs to.
    pub species: String,
    pub position: Position,
    pub energy: f64,
    pub max_energy: f64,
    pub age: u32,
    pub max_age: u32,
    pub alive: bool,
    pub death_reason: Option<DeathReason>,
    /// Ticks remaining until the individual may reproduce again.
    pub reproduction_cooldown: u32,
    pub reproduction_energy_cost: f64,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_euclidean() {
        let a = Position { x: 0.0, y: 0.0 };
        let b = Position { x: 3.0, y: 4.0 };
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }

    #[test]
    fn test_death_reason_display() {
        assert_eq!(DeathReason::OldAge.to_string(), "old age");
        assert_eq!(DeathReason::Starvation.to_string(), "starvation");
        assert_eq!(
            DeathReason::Predation {
                by: "tiger".to_string()
            }
            .to_string(),
            "predation by tiger"
        );
    }
}
