use crate::natural::sort_natural;
use crate::normalize::normalize;
use std::collections::HashSet;

/// Compute the catalog entries that have no counterpart in the orders
/// column: normalize both columns, collapse each to a set (duplicates within
/// a column are expected and collapse silently), take
/// `reference \ primary`, and sort the result naturally ascending.
///
/// `primary` is the orders side, which may contain duplicates; `reference`
/// is the presumed-complete catalog. An empty primary yields the whole
/// reference; an empty reference yields nothing. Input row order never
/// affects the result.
#[must_use]
pub fn missing_from(primary: &[Option<String>], reference: &[Option<String>]) -> Vec<String> {
    let primary: HashSet<String> = normalize(primary).into_iter().collect();
    let reference: HashSet<String> = normalize(reference).into_iter().collect();

    let mut missing: Vec<String> = reference.difference(&primary).cloned().collect();
    sort_natural(&mut missing);

    tracing::debug!(
        primary = primary.len(),
        reference = reference.len(),
        missing = missing.len(),
        "computed set difference"
    );

    missing
}
