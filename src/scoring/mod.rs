pub mod engine;
pub mod error;
pub mod rank;

pub use engine::{aggregate, ScoreBreakdown, ScoreResult, TierContribution};
pub use error::ScoringError;
pub use rank::{rank, RankedProvider, Ranking};
