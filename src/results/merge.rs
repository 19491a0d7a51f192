//! Merging and deduplication of result lists

use super::types::UpstreamResult;
use std::collections::HashSet;
use std::hash::Hash;

/// Remove items whose key was already seen, keeping the first occurrence
pub fn dedup_by_key<T, K, F>(items: Vec<T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

/// Deduplicate upstream results by exact link equality
///
/// Results without a link share one key, so only the first of them survives.
pub fn dedup_by_link(results: Vec<UpstreamResult>) -> Vec<UpstreamResult> {
    dedup_by_key(results, |r| r.link.clone())
}

/// Concatenate result lists in order, dedup by link and cap the length
pub fn merge_results(lists: Vec<Vec<UpstreamResult>>, limit: usize) -> Vec<UpstreamResult> {
    let mut merged = dedup_by_link(lists.into_iter().flatten().collect());
    merged.truncate(limit);
    merged
}
