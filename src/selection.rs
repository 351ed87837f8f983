use crate::catalog::ParameterId;

/// Parse raw console input such as `"2, 5,9"` into parameter ids.
///
/// Tokens are separated by commas and trimmed. Anything that is not a
/// plain run of ASCII digits (or does not fit in a `u32`) is dropped
/// silently, so `"1 2, 3"` yields only `3`. Order and duplicates are
/// kept; whether an id exists in the catalog is checked later by the
/// scoring engine.
pub fn parse_selection(raw: &str) -> Vec<ParameterId> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|token| token.parse::<u32>().ok())
        .map(ParameterId::from)
        .collect()
}
