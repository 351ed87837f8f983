use super::{Catalog, Provider, Tier};

/// Validate catalog contents at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_catalog(catalog: &Catalog) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if catalog.is_empty() {
        errors.push("catalog: must contain at least one parameter".to_string());
    }

    // Provider weights live on a normalized [0, 1] scale
    for entry in catalog.entries() {
        let parameter = &entry.parameter;
        for provider in Provider::ALL {
            let weight = parameter.provider_weight.get(provider);
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                errors.push(format!(
                    "parameters[{}].{}.{}: weight {} must be within [0, 1]",
                    parameter.id, parameter.name, provider, weight
                ));
            }
        }
    }

    for tier in Tier::ALL {
        let weight = catalog.tier_weights().get(tier);
        if !weight.is_finite() || weight < 0.0 {
            errors.push(format!(
                "tier_weights.{}: weight {} must be finite and non-negative",
                tier.label(),
                weight
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
