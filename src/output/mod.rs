pub mod formatter;
pub mod report;

pub use formatter::{
    format_breakdown, format_catalog, format_ranking, format_score, format_scores,
    format_selected, format_tsv, should_use_colors,
};
pub use report::{ProviderScore, ScoreReport, SelectedParameter, TierSummary};
