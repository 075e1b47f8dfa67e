use std::collections::BTreeMap;

use ecotone_core::config::EcosystemConfig;
use ecotone_core::world::EcosystemState;

fn config_with(counts: &[(&str, usize)], seed: u64) -> EcosystemConfig {
    let mut initial_counts = BTreeMap::new();
    for &(name, count) in counts {
        initial_counts.insert(name.to_string(), count);
    }
    EcosystemConfig {
        world_width: 800.0,
        world_height: 600.0,
        initial_counts,
        seed: Some(seed),
    }
}

#[test]
fn test_simulation_lifecycle() {
    // 1. Setup
    let config = config_with(&[("grass", 100), ("cow", 10), ("tiger", 1)], 7);
    let mut state = EcosystemState::new(config).expect("Failed to create world");
    assert_eq!(state.registry().count("grass").unwrap(), 100);
    assert_eq!(state.registry().count("cow").unwrap(), 10);
    assert_eq!(state.registry().count("tiger").unwrap(), 1);

    // 2. Run for 100 ticks
    for _ in 0..100 {
        state.tick().expect("Tick failed");
    }

    // 3. Verify
    assert_eq!(state.time_step(), 100);
    println!("Population after 100 ticks: {}", state.registry().total_count());

    // Post-cleanup invariants: everyone left is alive, within bounds,
    // with energy inside [0, max].
    for name in state.registry().names() {
        for individual in state.registry().list(&name).unwrap() {
            assert!(individual.alive);
            assert!(individual.death_reason.is_none());
            assert!(individual.energy > 0.0 && individual.energy <= individual.max_energy);
            assert!(individual.position.x >= 0.0 && individual.position.x <= 800.0);
            assert!(individual.position.y >= 0.0 && individual.position.y <= 600.0);
        }
    }
}

#[test]
fn test_population_history_is_bounded() {
    let config = config_with(&[("grass", 20)], 3);
    let mut state = EcosystemState::new(config).expect("Failed to create world");
    for _ in 0..150 {
        state.tick().expect("Tick failed");
    }
    let history = state.population_history();
    assert_eq!(history.len(), 100);
    // The oldest retained entry is from tick 50.
    assert!(history[0].contains_key("grass"));
}

#[test]
fn test_reset_starts_over() {
    let config = config_with(&[("grass", 30), ("cow", 3)], 11);
    let mut state = EcosystemState::new(config.clone()).expect("Failed to create world");
    for _ in 0..50 {
        state.tick().expect("Tick failed");
    }
    assert_eq!(state.time_step(), 50);

    state.reset(config).expect("Reset failed");
    assert_eq!(state.time_step(), 0);
    assert_eq!(state.registry().count("grass").unwrap(), 30);
    assert_eq!(state.registry().count("cow").unwrap(), 3);
    assert!(state.population_history().is_empty());
    let report = state.population_report();
    assert!(report.births.is_empty());
    assert!(report.deaths.is_empty());
}

#[test]
fn test_seeded_runs_match_exactly() {
    let run = || {
        let config = config_with(&[("grass", 50), ("cow", 5), ("tiger", 1)], 99);
        let mut state = EcosystemState::new(config).expect("Failed to create world");
        for _ in 0..60 {
            state.tick().expect("Tick failed");
        }
        let mut result: Vec<(String, Vec<(f64, f64, f64, u32)>)> = Vec::new();
        for name in state.registry().names() {
            let individuals = state
                .registry()
                .list(&name)
                .unwrap()
                .iter()
                .map(|i| (i.position.x, i.position.y, i.energy, i.age))
                .collect();
            result.push((name, individuals));
        }
        result
    };
    assert_eq!(run(), run());
}

#[test]
fn test_different_seeds_diverge() {
    let run = |seed: u64| {
        let config = config_with(&[("grass", 50), ("cow", 5)], seed);
        let mut state = EcosystemState::new(config).expect("Failed to create world");
        state.tick().expect("Tick failed");
        state
            .registry()
            .list("grass")
            .unwrap()
            .iter()
            .map(|i| (i.position.x, i.position.y))
            .collect::<Vec<_>>()
    };
    assert_ne!(run(1), run(2));
}

#[test]
fn test_report_serializes_to_json() {
    let config = config_with(&[("grass", 10)], 5);
    let mut state = EcosystemState::new(config).expect("Failed to create world");
    for _ in 0..10 {
        state.tick().expect("Tick failed");
    }
    let report = state.population_report();
    let json = serde_json::to_string(&report).expect("Serialization failed");
    assert!(json.contains("\"tick\":10"));
    assert!(json.contains("grass"));
}
