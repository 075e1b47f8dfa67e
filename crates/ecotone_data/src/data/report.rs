use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Copied display fields for one alive individual. Handed to rendering
/// collaborators instead of references into live engine storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualSnapshot {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub energy: f64,
    pub age: u32,
    pub alive: bool,
    pub max_energy: Option<f64>,
}

/// Aggregated population statistics for one simulation, copied out of the
/// engine at a tick boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PopulationReport {
    pub tick: u64,
    /// Current count per species.
    pub counts: BTreeMap<String, usize>,
    /// Cumulative births per species.
    pub births: BTreeMap<String, u64>,
    /// Cumulative deaths per species.
    pub deaths: BTreeMap<String, u64>,
    /// The last population snapshots, oldest first, capped at 100 points.
    pub history: Vec<BTreeMap<String, usize>>,
    /// Species whose current count is zero.
    pub extinct: Vec<String>,
}
