use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::error::ScoringError;
use crate::catalog::{Catalog, CatalogEntry, ParameterId, Provider, Tier};

/// What one priority tier contributed to each provider's total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierContribution {
    pub tier: Tier,
    pub selected: usize,      // Parameters selected in this tier, duplicates counted
    pub tier_weight: f64,
    pub per_provider: BTreeMap<Provider, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub tiers: Vec<TierContribution>,
}

/// Accumulated score per provider for one selection.
///
/// Scores are only comparable within the run that produced them; they are
/// not normalized against a theoretical maximum.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreResult {
    pub totals: BTreeMap<Provider, f64>,
    pub breakdown: ScoreBreakdown,
}

impl ScoreResult {
    /// Wrap precomputed totals with no breakdown.
    pub fn from_totals(totals: impl IntoIterator<Item = (Provider, f64)>) -> Self {
        Self {
            totals: totals.into_iter().collect(),
            breakdown: ScoreBreakdown::default(),
        }
    }

    pub fn score(&self, provider: Provider) -> Option<f64> {
        self.totals.get(&provider).copied()
    }
}

/// Aggregate a selection into per-provider scores.
///
/// Every selected parameter of tier T adds
/// `provider_weight[p] / n_T * tier_weight[T]` to provider `p`, where `n_T`
/// is the number of selected parameters in T (duplicates counted). A tier
/// with no selected parameters contributes nothing, so an empty selection
/// scores zero for every provider.
pub fn aggregate(
    selection: &[ParameterId],
    catalog: &Catalog,
) -> Result<ScoreResult, ScoringError> {
    // Resolve everything up front so an unknown id leaves no partial result
    let entries = selection
        .iter()
        .map(|&id| catalog.get(id).ok_or(ScoringError::UnknownParameter(id)))
        .collect::<Result<Vec<&CatalogEntry>, _>>()?;

    let mut counts: BTreeMap<Tier, usize> = Tier::ALL.iter().map(|&t| (t, 0)).collect();
    for entry in &entries {
        *counts.entry(entry.tier).or_insert(0) += 1;
    }
    debug!(
        n1 = counts[&Tier::Tier1],
        n2 = counts[&Tier::Tier2],
        n3 = counts[&Tier::Tier3],
        "partitioned selection by tier"
    );

    let zeros = || Provider::ALL.iter().map(|&p| (p, 0.0)).collect::<BTreeMap<_, _>>();
    let mut totals = zeros();
    let mut per_tier: BTreeMap<Tier, BTreeMap<Provider, f64>> =
        Tier::ALL.iter().map(|&t| (t, zeros())).collect();

    for entry in &entries {
        let n = counts[&entry.tier];
        if n == 0 {
            continue;
        }
        let tier_weight = catalog.tier_weights().get(entry.tier);
        for provider in Provider::ALL {
            let delta = (entry.parameter.provider_weight.get(provider) / n as f64) * tier_weight;
            *totals.entry(provider).or_insert(0.0) += delta;
            if let Some(slot) = per_tier.get_mut(&entry.tier) {
                *slot.entry(provider).or_insert(0.0) += delta;
            }
        }
    }

    let tiers = per_tier
        .into_iter()
        .map(|(tier, per_provider)| TierContribution {
            tier,
            selected: counts[&tier],
            tier_weight: catalog.tier_weights().get(tier),
            per_provider,
        })
        .collect();

    debug!(
        aws = totals[&Provider::Aws],
        azure = totals[&Provider::Azure],
        gcp = totals[&Provider::Gcp],
        selected = selection.len(),
        "aggregated provider scores"
    );

    Ok(ScoreResult {
        totals,
        breakdown: ScoreBreakdown { tiers },
    })
}
