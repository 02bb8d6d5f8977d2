use strsim::jaro_winkler;

use crate::models::TrackedItem;

/// Similarity above which a name counts as a fuzzy match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.85;

/// Keep the items whose name matches `query`.
///
/// A name matches when it contains the query (case-insensitive) or is a close
/// Jaro-Winkler match for it. An empty query keeps everything. Order is
/// preserved.
pub fn filter_items<'a, T: TrackedItem>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| name_matches(item.name(), &query))
        .collect()
}

fn name_matches(name: &str, query_lower: &str) -> bool {
    let name = name.to_lowercase();
    name.contains(query_lower) || jaro_winkler(&name, query_lower) > FUZZY_MATCH_THRESHOLD
}
