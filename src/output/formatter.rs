use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::catalog::{Catalog, CatalogEntry, ParameterId, Provider, ProviderWeights, Tier};
use crate::scoring::{Ranking, ScoreResult};

/// Format the catalog as a numbered list, one parameter per line
/// Format: "{id:>2}. {name} ({tier label})"
/// With `tier` set, only parameters of that tier are listed.
pub fn format_catalog(catalog: &Catalog, tier: Option<Tier>, use_colors: bool) -> String {
    let entries: Vec<&CatalogEntry> = match tier {
        Some(tier) => catalog.entries_in(tier).collect(),
        None => catalog.entries().collect(),
    };
    if entries.is_empty() {
        return "No parameters available.".to_string();
    }

    entries
        .into_iter()
        .map(|entry| {
            let index = format!("{:>2}.", entry.parameter.id);
            if use_colors {
                format!(
                    "{} {} {}",
                    index.dimmed(),
                    entry.parameter.name,
                    format!("({})", entry.tier.label()).cyan()
                )
            } else {
                format!("{} {} ({})", index, entry.parameter.name, entry.tier.label())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_weights(weights: &ProviderWeights) -> String {
    Provider::ALL
        .iter()
        .map(|&p| format!("{}: {}", p, weights.get(p)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format the selected parameters with each provider's weight
/// Ids missing from the catalog are skipped; the engine reports them.
pub fn format_selected(catalog: &Catalog, selection: &[ParameterId], use_colors: bool) -> String {
    if selection.is_empty() {
        return "No parameters selected.".to_string();
    }

    selection
        .iter()
        .filter_map(|&id| catalog.get(id))
        .map(|entry| {
            let weights = format_weights(&entry.parameter.provider_weight);
            if use_colors {
                format!(" - {}\n    {}", entry.parameter.name.bold(), weights)
            } else {
                format!(" - {}\n    {}", entry.parameter.name, weights)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a score with four decimal places
pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

/// Format final scores in fixed provider order
pub fn format_scores(result: &ScoreResult, use_colors: bool) -> String {
    result
        .totals
        .iter()
        .map(|(provider, score)| {
            let score = format_score(*score);
            if use_colors {
                format!("   {}: {}", provider.yellow(), score.bold())
            } else {
                format!("   {}: {}", provider, score)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a ranking with 1-based positions
/// Format: "   {i}. {provider} -> {score}"
pub fn format_ranking(ranking: &Ranking, use_colors: bool) -> String {
    ranking
        .iter()
        .enumerate()
        .map(|(idx, ranked)| {
            let position = format!("{}.", idx + 1);
            let score = format_score(ranked.score);
            if use_colors && idx == 0 {
                format!(
                    "   {} {} -> {}",
                    position.dimmed(),
                    ranked.provider.green().bold(),
                    score.bold()
                )
            } else if use_colors {
                format!("   {} {} -> {}", position.dimmed(), ranked.provider, score)
            } else {
                format!("   {} {} -> {}", position, ranked.provider, score)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Per-tier detail for verbose mode
pub fn format_breakdown(result: &ScoreResult) -> String {
    result
        .breakdown
        .tiers
        .iter()
        .map(|contribution| {
            let per_provider = contribution
                .per_provider
                .iter()
                .map(|(p, v)| format!("{}: {}", p, format_score(*v)))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "   {} ({}, weight {}): {} selected -> {}",
                contribution.tier,
                contribution.tier.label(),
                contribution.tier_weight,
                contribution.selected,
                per_provider
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a ranking as tab-separated values for scripting
/// Columns: provider, score (no headers, no colors)
pub fn format_tsv(ranking: &Ranking) -> String {
    ranking
        .iter()
        .map(|ranked| format!("{}\t{}", ranked.provider, format_score(ranked.score)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}
