use super::{Catalog, Parameter, ParameterId, ProviderWeights, Tier, TierAssignment, TierWeights};

/// (id, name, tier, [AWS, Azure, GCP])
const PARAMETERS: [(u32, &str, Tier, [f64; 3]); 18] = [
    (1, "establishment", Tier::Tier3, [1.0, 0.75, 0.5]),
    (2, "infrastructure", Tier::Tier1, [1.0, 0.75, 0.5]),
    (3, "number_of_services", Tier::Tier1, [1.0, 0.75, 0.5]),
    (4, "utilization", Tier::Tier2, [1.0, 0.75, 0.5]),
    (5, "pricing_models_cost_efficiency", Tier::Tier1, [0.75, 0.5, 1.0]),
    (6, "storage_service_options", Tier::Tier2, [1.0, 0.75, 0.5]),
    (7, "service_response_time", Tier::Tier2, [1.0, 1.0, 1.0]),
    (8, "accountability", Tier::Tier1, [1.0, 1.0, 1.0]),
    (9, "availability", Tier::Tier1, [1.0, 1.0, 1.0]),
    (10, "cloud_tools", Tier::Tier2, [1.0, 1.0, 1.0]),
    (11, "archival_backup", Tier::Tier1, [1.0, 0.75, 0.5]),
    (12, "market_share", Tier::Tier3, [1.0, 0.75, 0.5]),
    (13, "growth_rate", Tier::Tier3, [0.5, 0.75, 1.0]),
    (14, "offline_data_transfer", Tier::Tier2, [1.0, 0.75, 0.5]),
    (15, "disaster_recovery", Tier::Tier2, [1.0, 1.0, 0.0]),
    (16, "sla_flexibility", Tier::Tier1, [1.0, 1.0, 1.0]),
    (17, "compatibility_microsoft_products", Tier::Tier2, [0.75, 1.0, 0.5]),
    (18, "reputation", Tier::Tier3, [1.0, 0.75, 0.5]),
];

pub(super) fn catalog() -> Catalog {
    let parameters = PARAMETERS
        .iter()
        .map(|&(id, name, _, [aws, azure, gcp])| Parameter {
            id: ParameterId(id),
            name: name.to_string(),
            provider_weight: ProviderWeights::new(aws, azure, gcp),
        })
        .collect();
    let assignment: TierAssignment = PARAMETERS
        .iter()
        .map(|&(_, name, tier, _)| (name, tier))
        .collect();

    Catalog::new(parameters, assignment, TierWeights::default())
        .expect("built-in catalog assigns exactly one tier to every parameter")
}
