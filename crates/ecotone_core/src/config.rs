//! Configuration management for simulation parameters.
//!
//! Provides the strongly-typed configuration structure that maps to a
//! `config.toml` file. The configuration is immutable for the lifetime of
//! one simulation run; replacing it through `EcosystemState::reset` is the
//! only way to resize the world.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! world_width = 800.0
//! world_height = 600.0
//! seed = 42
//!
//! [initial_counts]
//! grass = 100
//! cow = 10
//! tiger = 1
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// World-level simulation configuration.
///
/// Defines world dimensions, the initial population per species, and the
/// optional RNG seed that makes a run reproducible.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EcosystemConfig {
    pub world_width: f64,
    pub world_height: f64,
    /// Initial individual count per species name. Species iterate in key
    /// order everywhere in the engine, so the map is ordered.
    pub initial_counts: BTreeMap<String, usize>,
    pub seed: Option<u64>,
}

impl Default for EcosystemConfig {
    fn default() -> Self {
        let mut initial_counts = BTreeMap::new();
        initial_counts.insert("grass".to_string(), 100);
        initial_counts.insert("cow".to_string(), 10);
        initial_counts.insert("tiger".to_string(), 1);
        Self {
            world_width: 800.0,
            world_height: 600.0,
            initial_counts,
            seed: None,
        }
    }
}

impl EcosystemConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a
    /// description of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.world_width.is_finite() && self.world_width > 0.0,
            "World width must be positive"
        );
        anyhow::ensure!(
            self.world_height.is_finite() && self.world_height > 0.0,
            "World height must be positive"
        );
        anyhow::ensure!(
            self.world_width <= 100_000.0 && self.world_height <= 100_000.0,
            "World dimensions too large (max 100000)"
        );
        for (name, count) in &self.initial_counts {
            anyhow::ensure!(!name.is_empty(), "Species name must not be empty");
            anyhow::ensure!(
                *count <= 1_000_000,
                "Initial count for '{name}' too large (max 1000000)"
            );
        }
        Ok(())
    }

    /// Loads and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = EcosystemConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_world_width() {
        let config = EcosystemConfig {
            world_width: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_world_height() {
        let config = EcosystemConfig {
            world_height: -10.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
            world_width = 100.0
            world_height = 50.0
            seed = 7

            [initial_counts]
            grass = 20
            cow = 2
        "#;
        let config = EcosystemConfig::from_toml(toml).unwrap();
        assert_eq!(config.world_width, 100.0);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.initial_counts.get("grass"), Some(&20));
        assert_eq!(config.initial_counts.get("tiger"), None);
    }

    #[test]
    fn test_from_toml_rejects_invalid() {
        let toml = r#"
            world_width = 0.0
            world_height = 50.0

            [initial_counts]
        "#;
        assert!(EcosystemConfig::from_toml(toml).is_err());
    }
}
