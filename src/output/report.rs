use anyhow::{Context, Result};
use serde::Serialize;

use crate::catalog::{Catalog, ParameterId, Provider, Tier};
use crate::scoring::{Ranking, ScoreResult};

#[derive(Debug, Serialize)]
pub struct SelectedParameter {
    pub id: ParameterId,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProviderScore {
    pub provider: Provider,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct TierSummary {
    pub tier: Tier,
    pub selected: usize,
    pub tier_weight: f64,
    pub contributions: Vec<ProviderScore>,
}

fn provider_scores<'a>(
    scores: impl IntoIterator<Item = (&'a Provider, &'a f64)>,
) -> Vec<ProviderScore> {
    scores
        .into_iter()
        .map(|(&provider, &score)| ProviderScore { provider, score })
        .collect()
}

/// Machine-readable summary of one scoring run.
#[derive(Debug, Serialize)]
pub struct ScoreReport {
    pub selection: Vec<SelectedParameter>,
    pub scores: Vec<ProviderScore>, // Fixed provider order
    pub ranking: Ranking,
    pub best: Option<Provider>,
    pub tiers: Vec<TierSummary>,
}

impl ScoreReport {
    pub fn new(
        catalog: &Catalog,
        selection: &[ParameterId],
        result: &ScoreResult,
        ranking: &Ranking,
    ) -> Self {
        let selection = selection
            .iter()
            .filter_map(|&id| catalog.get(id))
            .map(|entry| SelectedParameter {
                id: entry.parameter.id,
                name: entry.parameter.name.clone(),
            })
            .collect();
        let tiers = result
            .breakdown
            .tiers
            .iter()
            .map(|contribution| TierSummary {
                tier: contribution.tier,
                selected: contribution.selected,
                tier_weight: contribution.tier_weight,
                contributions: provider_scores(&contribution.per_provider),
            })
            .collect();

        Self {
            selection,
            scores: provider_scores(&result.totals),
            ranking: ranking.clone(),
            best: ranking.best().map(|r| r.provider),
            tiers,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report as JSON")
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("Failed to serialize report as YAML")
    }
}
