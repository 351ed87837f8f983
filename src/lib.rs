//! Rank cloud service providers (AWS, Azure, GCP) by tier-weighted scoring
//! over a selection of evaluation parameters.

pub mod catalog;
pub mod output;
pub mod scoring;
pub mod selection;

pub use catalog::{Catalog, ParameterId, Provider, Tier};
pub use scoring::{aggregate, rank, Ranking, ScoreResult, ScoringError};
pub use selection::parse_selection;
