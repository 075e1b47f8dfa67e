//! Registry of species constructors, keyed by species name.

use crate::error::{EcosystemError, Result};
use crate::species;
use ecotone_data::{Individual, Position};
use std::collections::BTreeMap;

/// A species constructor: builds one individual at the given position.
pub type Creator = Box<dyn Fn(Position) -> Individual + Send + Sync>;

/// Maps species names to constructors so worlds can be populated from
/// configuration alone.
pub struct SpeciesFactory {
    creators: BTreeMap<String, Creator>,
}

impl SpeciesFactory {
    /// An empty factory with no registered species.
    #[must_use]
    pub fn new() -> Self {
        Self {
            creators: BTreeMap::new(),
        }
    }

    /// A factory preloaded with the built-in grass/cow/tiger food chain.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut factory = Self::new();
        factory.register("grass", Box::new(species::grass));
        factory.register("cow", Box::new(species::cow));
        factory.register("tiger", Box::new(species::tiger));
        factory
    }

    /// Registers a constructor, replacing any previous one for the name.
    pub fn register(&mut self, name: &str, creator: Creator) {
        self.creators.insert(name.to_string(), creator);
    }

    /// Builds an individual of the named species.
    ///
    /// # Errors
    /// Returns [`EcosystemError::UnknownSpecies`] if the name was never
    /// registered.
    pub fn create(&self, name: &str, position: Position) -> Result<Individual> {
        let creator = self
            .creators
            .get(name)
            .ok_or_else(|| EcosystemError::UnknownSpecies(name.to_string()))?;
        Ok(creator(position))
    }

    /// Registered species names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.creators.keys().cloned().collect()
    }

    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.creators.contains_key(name)
    }

    pub fn clear(&mut self) {
        self.creators.clear();
    }
}

impl Default for SpeciesFactory {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// The constructors themselves are opaque closures; show the names only.
impl std::fmt::Debug for SpeciesFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeciesFactory")
            .field("species", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_food_chain() {
        let factory = SpeciesFactory::with_defaults();
        assert_eq!(factory.names(), vec!["cow", "grass", "tiger"]);
        let individual = factory
            .create("tiger", Position { x: 1.0, y: 2.0 })
            .unwrap();
        assert_eq!(individual.species, "tiger");
        assert_eq!(individual.position, Position { x: 1.0, y: 2.0 });
    }

    #[test]
    fn test_unknown_species_is_an_error() {
        let factory = SpeciesFactory::with_defaults();
        let err = factory
            .create("dragon", Position { x: 0.0, y: 0.0 })
            .unwrap_err();
        assert!(matches!(err, EcosystemError::UnknownSpecies(name) if name == "dragon"));
    }

    #[test]
    fn test_register_overwrites() {
        let mut factory = SpeciesFactory::new();
        factory.register("grass", Box::new(species::grass));
        factory.register(
            "grass",
            Box::new(|position| {
                let mut individual = species::grass(position);
                individual.energy = 1.0;
                individual
            }),
        );
        let individual = factory
            .create("grass", Position { x: 0.0, y: 0.0 })
            .unwrap();
        assert_eq!(individual.energy, 1.0);
    }

    #[test]
    fn test_debug_lists_species_names() {
        let factory = SpeciesFactory::with_defaults();
        let rendered = format!("{factory:?}");
        assert!(rendered.contains("grass"));
        assert!(rendered.contains("tiger"));
    }

    #[test]
    fn test_clear_empties_registry() {
        let mut factory = SpeciesFactory::with_defaults();
        factory.clear();
        assert!(!factory.is_registered("grass"));
        assert!(factory.names().is_empty());
    }
}
