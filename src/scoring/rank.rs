use serde::Serialize;

use super::engine::ScoreResult;
use super::error::ScoringError;
use crate::catalog::Provider;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedProvider {
    pub provider: Provider,
    pub score: f64,
}

/// Providers ordered by score, highest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ranking(Vec<RankedProvider>);

impl Ranking {
    /// Top-ranked provider. Always present for a ranking built by `rank`.
    pub fn best(&self) -> Option<&RankedProvider> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedProvider> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn providers(&self) -> Vec<Provider> {
        self.0.iter().map(|r| r.provider).collect()
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a RankedProvider;
    type IntoIter = std::slice::Iter<'a, RankedProvider>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Rank providers by score descending.
///
/// Equal scores keep the fixed provider order (AWS, Azure, GCP): entries
/// start in that order and the sort is stable.
pub fn rank(result: &ScoreResult) -> Result<Ranking, ScoringError> {
    let mut ranked = Provider::ALL
        .iter()
        .map(|&provider| {
            result
                .score(provider)
                .map(|score| RankedProvider { provider, score })
                .ok_or(ScoringError::MalformedScoreResult { missing: provider })
        })
        .collect::<Result<Vec<_>, _>>()?;

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    Ok(Ranking(ranked))
}
