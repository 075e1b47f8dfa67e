//! Core data structures for the ecotone simulation.
//!
//! This crate holds the plain value types shared between the engine
//! (`ecotone_core`) and its read-only consumers: the individual record,
//! the role variants that select per-role behavior, and the copy-out
//! snapshot/report types handed to external collaborators.

pub mod data;

pub use data::individual::{
    ConsumerTraits, DeathReason, Individual, Position, ProducerTraits, Role,
};
pub use data::report::{IndividualSnapshot, PopulationReport};
