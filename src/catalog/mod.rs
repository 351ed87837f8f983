mod builtin;
mod schema;
pub mod validation;

pub use schema::{
    Parameter, ParameterId, ParseTierError, Provider, ProviderWeights, Tier, TierAssignment,
    TierWeights,
};
pub use validation::validate_catalog;

use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("parameter '{name}' has no priority tier assigned")]
    MissingTier { name: String },
    #[error("parameter name '{name}' is used more than once")]
    DuplicateName { name: String },
    #[error("parameter id {id} is used more than once")]
    DuplicateId { id: ParameterId },
}

/// A parameter together with its resolved priority tier.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub parameter: Parameter,
    pub tier: Tier,
}

/// Immutable reference data for scoring: the parameter catalog, the tier
/// assignment keyed by parameter name, and the tier weights.
///
/// Tiers are resolved once at construction so every catalog entry is
/// guaranteed to have one.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: BTreeMap<ParameterId, CatalogEntry>,
    assignment: TierAssignment,
    tier_weights: TierWeights,
}

impl Catalog {
    /// Build a catalog, failing on the first parameter without a tier or
    /// on any repeated id or name.
    pub fn new(
        parameters: Vec<Parameter>,
        assignment: TierAssignment,
        tier_weights: TierWeights,
    ) -> Result<Self, CatalogError> {
        let mut entries = BTreeMap::new();
        let mut names = HashSet::new();

        for parameter in parameters {
            if !names.insert(parameter.name.clone()) {
                return Err(CatalogError::DuplicateName {
                    name: parameter.name,
                });
            }
            let tier = assignment
                .tier_for(&parameter.name)
                .ok_or_else(|| CatalogError::MissingTier {
                    name: parameter.name.clone(),
                })?;
            let id = parameter.id;
            if entries.insert(id, CatalogEntry { parameter, tier }).is_some() {
                return Err(CatalogError::DuplicateId { id });
            }
        }

        Ok(Self {
            entries,
            assignment,
            tier_weights,
        })
    }

    /// The built-in 18-parameter catalog with the default tier weights.
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    pub fn get(&self, id: ParameterId) -> Option<&CatalogEntry> {
        self.entries.get(&id)
    }

    /// Entries in ascending id order
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    /// Entries of one tier, in ascending id order
    pub fn entries_in(&self, tier: Tier) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values().filter(move |entry| entry.tier == tier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn assignment(&self) -> &TierAssignment {
        &self.assignment
    }

    pub fn tier_weights(&self) -> &TierWeights {
        &self.tier_weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(id: u32, name: &str) -> Parameter {
        Parameter {
            id: ParameterId(id),
            name: name.to_string(),
            provider_weight: ProviderWeights::new(1.0, 0.5, 0.0),
        }
    }

    #[test]
    fn test_new_resolves_tiers() {
        let assignment: TierAssignment = [("a", Tier::Tier1), ("b", Tier::Tier3)]
            .into_iter()
            .collect();
        let catalog = Catalog::new(
            vec![param(1, "a"), param(2, "b")],
            assignment,
            TierWeights::default(),
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(ParameterId(1)).unwrap().tier, Tier::Tier1);
        assert_eq!(catalog.get(ParameterId(2)).unwrap().tier, Tier::Tier3);
        assert!(catalog.get(ParameterId(3)).is_none());
    }

    #[test]
    fn test_new_fails_on_missing_tier() {
        let assignment: TierAssignment = [("a", Tier::Tier1)].into_iter().collect();
        let result = Catalog::new(
            vec![param(1, "a"), param(2, "b")],
            assignment,
            TierWeights::default(),
        );
        assert_eq!(
            result.unwrap_err(),
            CatalogError::MissingTier {
                name: "b".to_string()
            }
        );
    }

    #[test]
    fn test_new_fails_on_duplicate_name() {
        let assignment: TierAssignment = [("a", Tier::Tier1)].into_iter().collect();
        let result = Catalog::new(
            vec![param(1, "a"), param(2, "a")],
            assignment,
            TierWeights::default(),
        );
        assert!(matches!(result, Err(CatalogError::DuplicateName { .. })));
    }

    #[test]
    fn test_new_fails_on_duplicate_id() {
        let assignment: TierAssignment = [("a", Tier::Tier1), ("b", Tier::Tier2)]
            .into_iter()
            .collect();
        let result = Catalog::new(
            vec![param(7, "a"), param(7, "b")],
            assignment,
            TierWeights::default(),
        );
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateId { id: ParameterId(7) }
        );
    }

    #[test]
    fn test_entries_sorted_by_id() {
        let assignment: TierAssignment = [("a", Tier::Tier1), ("b", Tier::Tier2)]
            .into_iter()
            .collect();
        let catalog = Catalog::new(
            vec![param(5, "b"), param(2, "a")],
            assignment,
            TierWeights::default(),
        )
        .unwrap();
        let ids: Vec<u32> = catalog.entries().map(|e| e.parameter.id.0).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn test_entries_in_tier() {
        let assignment: TierAssignment =
            [("a", Tier::Tier2), ("b", Tier::Tier1), ("c", Tier::Tier2)]
                .into_iter()
                .collect();
        let catalog = Catalog::new(
            vec![param(3, "c"), param(1, "a"), param(2, "b")],
            assignment,
            TierWeights::default(),
        )
        .unwrap();
        let ids: Vec<u32> = catalog.entries_in(Tier::Tier2).map(|e| e.parameter.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(catalog.entries_in(Tier::Tier3).count(), 0);
    }

    #[test]
    fn test_catalog_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
