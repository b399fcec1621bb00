//! Substring filtering over provider records

use crate::models::Provider;

/// Records whose name or specialization contains `query`, and whose
/// specialization contains `category`, compared case-insensitively.
///
/// `None` and `Some("")` both mean "no constraint" on that dimension. The
/// input order is kept and the input records are never modified.
pub fn filter_providers<'a, I>(records: I, query: Option<&str>, category: Option<&str>) -> Vec<Provider>
where
    I: IntoIterator<Item = &'a Provider>,
{
    let query = non_empty_lowercase(query);
    let category = non_empty_lowercase(category);

    records
        .into_iter()
        .filter(|provider| matches_provider(provider, query.as_deref(), category.as_deref()))
        .cloned()
        .collect()
}

/// Both needles must already be lowercased.
fn matches_provider(provider: &Provider, query: Option<&str>, category: Option<&str>) -> bool {
    let specialization = provider.specialization.to_lowercase();

    if let Some(query) = query {
        if !provider.name.to_lowercase().contains(query) && !specialization.contains(query) {
            return false;
        }
    }

    if let Some(category) = category {
        if !specialization.contains(category) {
            return false;
        }
    }

    true
}

fn non_empty_lowercase(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_lowercase)
}
