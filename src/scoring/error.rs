use crate::catalog::{ParameterId, Provider};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    /// The selection referenced an id that is not in the catalog.
    #[error("unknown parameter id {0}")]
    UnknownParameter(ParameterId),

    /// A score result handed to `rank` lacks an entry for a provider.
    /// This is a programming error at the call site, not bad user input.
    #[error("malformed score result: missing score for {missing}")]
    MalformedScoreResult { missing: Provider },
}

impl ScoringError {
    /// True when the error stems from user input rather than a bug.
    pub fn is_user_error(&self) -> bool {
        matches!(self, ScoringError::UnknownParameter(_))
    }
}
