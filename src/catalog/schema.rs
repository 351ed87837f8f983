use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Cloud service provider being compared.
///
/// The declaration order is the order of every weight triple and the
/// order used to break ties when ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Provider {
    #[serde(rename = "AWS")]
    Aws,
    #[serde(rename = "Azure")]
    Azure,
    #[serde(rename = "GCP")]
    Gcp,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Aws, Provider::Azure, Provider::Gcp];

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Aws => "AWS",
            Provider::Azure => "Azure",
            Provider::Gcp => "GCP",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stable numeric identifier of a catalog parameter (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterId(pub u32);

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ParameterId {
    fn from(id: u32) -> Self {
        ParameterId(id)
    }
}

/// How favorably each provider scores on one parameter, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProviderWeights {
    #[serde(rename = "AWS")]
    pub aws: f64,
    #[serde(rename = "Azure")]
    pub azure: f64,
    #[serde(rename = "GCP")]
    pub gcp: f64,
}

impl ProviderWeights {
    /// Build from a triple in `Provider::ALL` order.
    pub const fn new(aws: f64, azure: f64, gcp: f64) -> Self {
        Self { aws, azure, gcp }
    }

    pub fn get(&self, provider: Provider) -> f64 {
        match provider {
            Provider::Aws => self.aws,
            Provider::Azure => self.azure,
            Provider::Gcp => self.gcp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: ParameterId,
    pub name: String,
    pub provider_weight: ProviderWeights,
}

/// Priority tier of a parameter. `Tier1` is the most important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "PL1")]
    Tier1,
    #[serde(rename = "PL2")]
    Tier2,
    #[serde(rename = "PL3")]
    Tier3,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Tier1, Tier::Tier2, Tier::Tier3];

    /// Short priority-level label, e.g. "PL1"
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Tier1 => "PL1",
            Tier::Tier2 => "PL2",
            Tier::Tier3 => "PL3",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Tier1 => f.write_str("Tier-1"),
            Tier::Tier2 => f.write_str("Tier-2"),
            Tier::Tier3 => f.write_str("Tier-3"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown priority tier '{0}' (expected 1-3, PL1-PL3 or tier-1..tier-3)")]
pub struct ParseTierError(String);

impl FromStr for Tier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let digit = normalized
            .strip_prefix("pl")
            .or_else(|| normalized.strip_prefix("tier-"))
            .or_else(|| normalized.strip_prefix("tier"))
            .unwrap_or(normalized.as_str());
        match digit {
            "1" => Ok(Tier::Tier1),
            "2" => Ok(Tier::Tier2),
            "3" => Ok(Tier::Tier3),
            _ => Err(ParseTierError(s.to_string())),
        }
    }
}

/// Relative weight carried by each tier.
///
/// The weights need not sum to 1; the default (0.5 / 0.3 / 0.2) does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierWeights {
    #[serde(rename = "PL1")]
    pub tier1: f64,
    #[serde(rename = "PL2")]
    pub tier2: f64,
    #[serde(rename = "PL3")]
    pub tier3: f64,
}

impl Default for TierWeights {
    fn default() -> Self {
        Self {
            tier1: 0.5,
            tier2: 0.3,
            tier3: 0.2,
        }
    }
}

impl TierWeights {
    pub fn get(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Tier1 => self.tier1,
            Tier::Tier2 => self.tier2,
            Tier::Tier3 => self.tier3,
        }
    }
}

/// Tier lookup keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierAssignment(HashMap<String, Tier>);

impl TierAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tier_for(&self, name: &str) -> Option<Tier> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Tier)> for TierAssignment {
    fn from_iter<I: IntoIterator<Item = (S, Tier)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, tier)| (name.into(), tier)).collect())
    }
}
