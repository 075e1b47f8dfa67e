//! Error types for the ecotone engine.
//!
//! Only configuration-class failures are signaled as errors: the species
//! set is fixed at startup, so an unknown species name reaching a registry
//! or factory lookup is a programming error that should surface to the
//! caller. Modeling edge cases (no food in range, ineligible reproduction)
//! are normal outcomes and are represented as no-ops, not errors.

use thiserror::Error;

/// Main error type for ecotone engine operations.
#[derive(Error, Debug)]
pub enum EcosystemError {
    /// A species name that was never registered reached a registry or
    /// factory accessor.
    #[error("unknown species: {0}")]
    UnknownSpecies(String),

    /// Invalid simulation configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for ecotone engine operations.
pub type Result<T> = std::result::Result<T, EcosystemError>;
