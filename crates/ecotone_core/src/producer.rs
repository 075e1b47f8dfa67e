//! Producer growth and density-competition model.
//!
//! A producer grows energy passively each tick, throttled by how crowded
//! its neighborhood is. Local density is the count of other alive
//! producers within `competition_radius`, normalized by the theoretical
//! maximum the circle could hold at [`AREA_PER_INDIVIDUAL`] world units
//! each, clamped to [0, 1]. Density is always evaluated against the tick's
//! snapshot so every producer sees the same neighborhood.

use crate::lifecycle;
use crate::snapshot::WorldView;
use ecotone_data::{Individual, ProducerTraits, Role};

/// World-area units one producer is assumed to occupy when normalizing
/// local density.
pub const AREA_PER_INDIVIDUAL: f64 = 400.0;

/// Minimum fraction of the base growth rate that competition can never
/// push growth below.
pub const MIN_GROWTH_FRACTION: f64 = 0.01;

/// Growth bonus factor applied when a producer has no neighbors at all.
pub const OPEN_NICHE_FACTOR: f64 = 2.0;

/// Local crowding in [0, 1] among same-species producers, excluding the
/// individual itself. Zero radius or a missing index yields zero density.
#[must_use]
pub fn local_density(individual: &Individual, traits: &ProducerTraits, view: &WorldView) -> f64 {
    let index = match view.producer_index(&individual.species) {
        Some(index) if !index.is_empty() => index,
        _ => return 0.0,
    };
    let max_possible =
        std::f64::consts::PI * traits.competition_radius * traits.competition_radius
            / AREA_PER_INDIVIDUAL;
    if max_possible <= 0.0 {
        return 0.0;
    }
    let nearby = index.count_within(&individual.position, traits.competition_radius, individual.id);
    (nearby as f64 / max_possible).min(1.0)
}

/// Growth rate after competition: `base * (1 - density^0.3 * max_effect)`,
/// with an open-niche bonus at exactly zero density and a strictly
/// positive floor.
#[must_use]
pub fn adjusted_growth_rate(density: f64, traits: &ProducerTraits) -> f64 {
    let competition_factor = if density == 0.0 {
        OPEN_NICHE_FACTOR
    } else {
        1.0 - density.powf(0.3) * traits.max_competition_effect
    };
    let adjusted = traits.base_growth_rate * competition_factor;
    adjusted.max(traits.base_growth_rate * MIN_GROWTH_FRACTION)
}

/// Per-tick producer update: cooldown decay, aging, then growth clamped
/// to `max_energy`.
pub fn update(individual: &mut Individual, view: &WorldView) {
    lifecycle::base_update(individual);
    if !individual.alive {
        return;
    }
    let traits = match &individual.role {
        Role::Producer(traits) => traits,
        _ => return,
    };
    let density = local_density(individual, traits, view);
    let rate = adjusted_growth_rate(density, traits);
    individual.energy = (individual.energy + rate).min(individual.max_energy);
}
