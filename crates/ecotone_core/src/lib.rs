//! # Ecotone Core
//!
//! The simulation engine for ecotone - a discrete-time producer/consumer
//! ecosystem model.
//!
//! This crate contains the deterministic simulation logic, including:
//! - Individual lifecycle management (aging, starvation, predation)
//! - The producer growth and density-competition model
//! - The consumer foraging and hunting model
//! - Species registry and per-tick spatial queries
//! - Population statistics and structured logging
//!
//! ## Architecture
//!
//! The engine is single-threaded and I/O free. A tick is a strictly
//! ordered sequence of phases (snapshot, update, reproduction, statistics,
//! cleanup) with a deterministic iteration order, so seeding the
//! engine-owned RNG makes a full tick sequence reproducible.
//!
//! ## Example
//!
//! ```
//! use ecotone_core::config::EcosystemConfig;
//! use ecotone_core::world::EcosystemState;
//!
//! let mut config = EcosystemConfig::default();
//! config.seed = Some(42);
//! let mut state = EcosystemState::new(config).unwrap();
//! state.tick().unwrap();
//! assert_eq!(state.time_step(), 1);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Consumer foraging and hunting model
pub mod consumer;
/// Typed engine errors (configuration-class failures)
pub mod error;
/// Species construction by name, used at world initialization
pub mod factory;
/// Individual base lifecycle (aging, death, movement, reproduction)
pub mod lifecycle;
/// Tick timing metrics and logging setup
pub mod metrics;
/// Producer growth and density-competition model
pub mod producer;
/// Species registry: ownership and queries over all individuals
pub mod registry;
/// Read-only per-tick world view
pub mod snapshot;
/// Constructors and constants for the built-in species
pub mod species;
/// Per-tick position indexes for density queries
pub mod spatial;
/// Birth/death counters and bounded population history
pub mod stats;
/// The ecosystem orchestrator and tick pipeline
pub mod world;

pub use config::EcosystemConfig;
pub use error::{EcosystemError, Result};
pub use factory::SpeciesFactory;
pub use metrics::{init_logging, Metrics};
pub use registry::SpeciesRegistry;
pub use world::EcosystemState;
